pub(crate) mod nav;
pub(crate) mod routes;
