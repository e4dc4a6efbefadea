//! Diesel schema for support-message persistence.

diesel::table! {
    /// Stored support messages.
    support_messages (id) {
        /// Message identifier.
        id -> Uuid,
        /// Submitter name.
        #[max_length = 200]
        name -> Varchar,
        /// Submitter email address.
        #[max_length = 320]
        email -> Varchar,
        /// Message body.
        message -> Text,
        /// Automated reply, when one was generated.
        ai_response -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
