///////////////////////////////////////////////////////////////////////
// Accounts
///////////////////////////////////////////////////////////////////////

table! {
    account (id) {
        id -> BigInt,
        user_name -> Text,
        location -> Text,
        first_name -> Text,
        last_name -> Text,
        password -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Posts, comments and likes
///////////////////////////////////////////////////////////////////////

table! {
    post (id) {
        id -> BigInt,
        account_id -> BigInt,
        location -> Text,
        title -> Text,
        content -> Text,
        image -> Text,
    }
}

table! {
    comment (id) {
        id -> BigInt,
        account_id -> BigInt,
        post_id -> BigInt,
        content -> Text,
    }
}

table! {
    post_like (account_id, post_id) {
        account_id -> BigInt,
        post_id -> BigInt,
    }
}

table! {
    comment_like (account_id, comment_id) {
        account_id -> BigInt,
        comment_id -> BigInt,
    }
}

joinable!(post -> account (account_id));
joinable!(comment -> account (account_id));
joinable!(comment -> post (post_id));
joinable!(post_like -> post (post_id));
joinable!(comment_like -> comment (comment_id));

///////////////////////////////////////////////////////////////////////
// Tags
///////////////////////////////////////////////////////////////////////

table! {
    tag (id) {
        id -> BigInt,
        name -> Text,
        description -> Nullable<Text>,
    }
}

table! {
    post_tag (post_id, tag_id) {
        post_id -> BigInt,
        tag_id -> BigInt,
    }
}

joinable!(post_tag -> post (post_id));
joinable!(post_tag -> tag (tag_id));

///////////////////////////////////////////////////////////////////////
// Lodgings
///////////////////////////////////////////////////////////////////////

table! {
    lodging (id) {
        id -> BigInt,
        name -> Text,
        location -> Text,
    }
}

table! {
    lodging_visit (id) {
        id -> BigInt,
        post_id -> BigInt,
        lodging_id -> BigInt,
        cost -> Integer,
        rating -> Integer,
        comment -> Text,
    }
}

joinable!(lodging_visit -> post (post_id));
joinable!(lodging_visit -> lodging (lodging_id));

///////////////////////////////////////////////////////////////////////
// Destination folders
///////////////////////////////////////////////////////////////////////

table! {
    destination_folder (id) {
        id -> BigInt,
        account_id -> BigInt,
        name -> Text,
    }
}

table! {
    saved_destination (folder_id, post_id) {
        folder_id -> BigInt,
        post_id -> BigInt,
    }
}

joinable!(destination_folder -> account (account_id));
joinable!(saved_destination -> destination_folder (folder_id));
joinable!(saved_destination -> post (post_id));

///////////////////////////////////////////////////////////////////////
// To-do list
///////////////////////////////////////////////////////////////////////

table! {
    todo (id) {
        id -> BigInt,
        account_id -> BigInt,
        name -> Text,
        description -> Text,
    }
}

joinable!(todo -> account (account_id));

allow_tables_to_appear_in_same_query!(
    account,
    post,
    comment,
    post_like,
    comment_like,
    tag,
    post_tag,
    lodging,
    lodging_visit,
    destination_folder,
    saved_destination,
    todo,
);
