diesel::table! {
    categories (id) {
        id -> Integer,
        name -> Text,
        description -> Nullable<Text>,
    }
}

diesel::table! {
    category_keywords (id) {
        id -> Integer,
        category_id -> Integer,
        keyword -> Text,
    }
}

diesel::table! {
    departments (id) {
        id -> Integer,
        name -> Text,
    }
}

diesel::table! {
    staff (id) {
        id -> Integer,
        first_name -> Text,
        last_name -> Text,
    }
}

diesel::joinable!(category_keywords -> categories (category_id));

diesel::allow_tables_to_appear_in_same_query!(categories, category_keywords, departments, staff,);
