//! Resource wrappers built on [`Api`](crate::api::Api).
//!
//! Each resource is a marker type implementing
//! [`ApiResource`](crate::api::ApiResource) plus a type alias binding it to
//! [`Api`](crate::api::Api), e.g. `Boards<'c, T> = Api<'c, Board, T>`.

mod board;
mod card;
mod card_list;
mod member;

pub use board::{Board, BoardList, BoardLists, Boards, LIST_FILTERS};
pub use card::{Card, Cards, NewAttachment, NewCard};
pub use card_list::{CardList, CardLists};
pub use member::{Member, Members, BOARD_FILTERS};
