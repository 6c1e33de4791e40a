pub mod collection;

pub use collection::{InputOptions, collect_inputs, expand_dir, expand_glob, read_list};
