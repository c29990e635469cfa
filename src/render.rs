pub(crate) mod html;
pub(crate) mod json;
pub(crate) mod sink;
