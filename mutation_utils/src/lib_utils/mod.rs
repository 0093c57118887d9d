pub mod compare;
pub mod error;
pub mod frequency;
pub mod mutation_list;
pub mod records;
pub mod struct_helper;
pub mod substitution;
