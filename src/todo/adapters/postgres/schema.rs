//! Diesel schema for todo persistence.

diesel::table! {
    /// To-do items.
    todos (id) {
        /// Store-assigned identifier.
        id -> Int4,
        /// Description of the work item.
        task -> Varchar,
        /// Completion flag, `false` unless set.
        completed -> Bool,
    }
}
