pub(crate) mod floor;
pub(crate) mod scroller;
