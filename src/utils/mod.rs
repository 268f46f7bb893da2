pub(crate) mod serialization;
