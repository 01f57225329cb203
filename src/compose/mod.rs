pub(crate) mod depth;
