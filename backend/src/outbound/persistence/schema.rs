//! Diesel table definitions matching the embedded migrations.
//!
//! Note and comment bodies are stored in a `body` column; the domain calls
//! the field `text`, which Diesel's `table!` macro reserves for a SQL type.

diesel::table! {
    users (id) {
        id -> Text,
        username -> Text,
        password_hash -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    notes (id) {
        id -> Integer,
        title -> Text,
        body -> Text,
        slug -> Text,
        author_id -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    news (id) {
        id -> Integer,
        title -> Text,
        body -> Text,
        date -> Timestamp,
    }
}

diesel::table! {
    comments (id) {
        id -> Integer,
        news_id -> Integer,
        author_id -> Text,
        body -> Text,
        created -> Timestamp,
    }
}

diesel::joinable!(notes -> users (author_id));
diesel::joinable!(comments -> news (news_id));
diesel::joinable!(comments -> users (author_id));

diesel::allow_tables_to_appear_in_same_query!(users, notes, news, comments);
