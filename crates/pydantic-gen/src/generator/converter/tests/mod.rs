mod enums;
mod forward_refs;
