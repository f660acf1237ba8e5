mod controller;
mod notice;
mod session;
mod view;

pub use controller::{CatalogController, Confirm, StdinConfirm};
pub use notice::{Notice, NoticeBoard, NoticeKind, NOTICE_TTL};
pub use session::{run as run_session, Session};
pub use view::{EditorForm, ListView, ViewState, LOADING, NO_PRODUCTS};
