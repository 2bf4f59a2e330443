pub mod count_token_frequencies;
pub use count_token_frequencies::count_token_frequencies;

pub mod fit_column;
pub use fit_column::fit_column;

pub mod format_enumerated_list;
pub use format_enumerated_list::format_enumerated_list;

pub mod read_labeled_messages;
pub use read_labeled_messages::{
    read_labeled_messages_from_path, read_labeled_messages_from_string,
};
