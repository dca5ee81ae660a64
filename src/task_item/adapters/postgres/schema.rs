//! Diesel schema for task item persistence.

diesel::table! {
    /// Task item records.
    task_items (id) {
        /// Storage-assigned identifier.
        id -> Int4,
        /// Task item title.
        #[max_length = 128]
        title -> Varchar,
        /// Task item description.
        #[max_length = 4096]
        description -> Varchar,
        /// Lifecycle state as a small integer.
        state -> Int2,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
    }
}
