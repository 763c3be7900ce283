pub(crate) mod anchor;
pub(crate) mod resolver;
pub(crate) mod tracker;
