//! Employee roster screens: the paginated list, the create/edit form and the
//! read-only details sheet.

pub mod details;
pub mod form;
pub mod list;
