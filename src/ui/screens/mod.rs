pub(crate) mod distribution;
pub(crate) mod form;
pub(crate) mod summary;
