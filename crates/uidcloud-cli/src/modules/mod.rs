pub(crate) mod groups;
pub(crate) mod shared;
pub(crate) mod users;
