pub(crate) mod countdown;
pub(crate) mod gate;
pub(crate) mod scheduler;
