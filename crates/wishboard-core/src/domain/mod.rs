//! Domain Layer
//!
//! Entities and the rules that act on them. No I/O happens here.

mod board;
mod engagement;
mod error;
mod identity;
mod prefecture;
mod visit;
mod wish;

pub use board::{board_slug, query_param, resolve_board_id, BoardId, BoardResolution, BOARD_PARAM};
pub use engagement::{comment, decode_list, encode_list, format_timestamp, join, toggle_like, Comment};
pub use error::{DomainError, DomainResult, ValidationError};
pub use identity::AuthorId;
pub use prefecture::{by_code, by_svg_id, Prefecture, PREFECTURES};
pub use visit::{MapMode, RegionShade, VisitRecord, VisitedSets};
pub use wish::{NewWish, Wish, WishId, WishPatch};
