//! Region Lookup Tables
//!
//! The map asset names each path by an uppercase English prefecture name.
//! Records store the two-digit JIS code; the UI shows the Japanese name.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefecture {
    pub svg_id: &'static str,
    pub code: &'static str,
    pub name_ja: &'static str,
}

const fn pref(svg_id: &'static str, code: &'static str, name_ja: &'static str) -> Prefecture {
    Prefecture { svg_id, code, name_ja }
}

pub const PREFECTURES: [Prefecture; 47] = [
    pref("HOKKAIDO", "01", "北海道"),
    pref("AOMORI", "02", "青森県"),
    pref("IWATE", "03", "岩手県"),
    pref("MIYAGI", "04", "宮城県"),
    pref("AKITA", "05", "秋田県"),
    pref("YAMAGATA", "06", "山形県"),
    pref("FUKUSHIMA", "07", "福島県"),
    pref("IBARAKI", "08", "茨城県"),
    pref("TOCHIGI", "09", "栃木県"),
    pref("GUNMA", "10", "群馬県"),
    pref("SAITAMA", "11", "埼玉県"),
    pref("CHIBA", "12", "千葉県"),
    pref("TOKYO", "13", "東京都"),
    pref("KANAGAWA", "14", "神奈川県"),
    pref("NIIGATA", "15", "新潟県"),
    pref("TOYAMA", "16", "富山県"),
    pref("ISHIKAWA", "17", "石川県"),
    pref("FUKUI", "18", "福井県"),
    pref("YAMANASHI", "19", "山梨県"),
    pref("NAGANO", "20", "長野県"),
    pref("GIFU", "21", "岐阜県"),
    pref("SHIZUOKA", "22", "静岡県"),
    pref("AICHI", "23", "愛知県"),
    pref("MIE", "24", "三重県"),
    pref("SHIGA", "25", "滋賀県"),
    pref("KYOTO", "26", "京都府"),
    pref("OSAKA", "27", "大阪府"),
    pref("HYOGO", "28", "兵庫県"),
    pref("NARA", "29", "奈良県"),
    pref("WAKAYAMA", "30", "和歌山県"),
    pref("TOTTORI", "31", "鳥取県"),
    pref("SHIMANE", "32", "島根県"),
    pref("OKAYAMA", "33", "岡山県"),
    pref("HIROSHIMA", "34", "広島県"),
    pref("YAMAGUCHI", "35", "山口県"),
    pref("TOKUSHIMA", "36", "徳島県"),
    pref("KAGAWA", "37", "香川県"),
    pref("EHIME", "38", "愛媛県"),
    pref("KOCHI", "39", "高知県"),
    pref("FUKUOKA", "40", "福岡県"),
    pref("SAGA", "41", "佐賀県"),
    pref("NAGASAKI", "42", "長崎県"),
    pref("KUMAMOTO", "43", "熊本県"),
    pref("OITA", "44", "大分県"),
    pref("MIYAZAKI", "45", "宮崎県"),
    pref("KAGOSHIMA", "46", "鹿児島県"),
    pref("OKINAWA", "47", "沖縄県"),
];

/// Look up a path id from the map asset (case-insensitive)
pub fn by_svg_id(id: &str) -> Option<&'static Prefecture> {
    let id = id.trim();
    PREFECTURES.iter().find(|p| p.svg_id.eq_ignore_ascii_case(id))
}

pub fn by_code(code: &str) -> Option<&'static Prefecture> {
    PREFECTURES.iter().find(|p| p.code == code)
}
