//! Diesel table definitions mirroring `backend/migrations`.
//!
//! Keep in sync with the SQL migrations; regenerate with
//! `diesel print-schema` after changing them.

diesel::table! {
    /// Registered users. `email` carries a unique index.
    users (id) {
        id -> Int4,
        email -> Varchar,
        /// Argon2id PHC string; never returned by the API.
        password_hash -> Text,
    }
}

diesel::table! {
    people (id) {
        id -> Int4,
        name -> Varchar,
        description -> Text,
    }
}

diesel::table! {
    planets (id) {
        id -> Int4,
        name -> Varchar,
        description -> Text,
    }
}

diesel::table! {
    /// A user's favourite person or planet. Exactly one target is expected
    /// but not enforced.
    favorites (id) {
        id -> Int4,
        user_id -> Int4,
        person_id -> Nullable<Int4>,
        planet_id -> Nullable<Int4>,
    }
}

diesel::joinable!(favorites -> users (user_id));
diesel::joinable!(favorites -> people (person_id));
diesel::joinable!(favorites -> planets (planet_id));

diesel::allow_tables_to_appear_in_same_query!(favorites, people, planets, users);
