///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        email -> Text,
        display_name -> Text,
        password -> Text,
        role -> SmallInt,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Places
///////////////////////////////////////////////////////////////////////

table! {
    places (rowid) {
        rowid -> BigInt,
        id -> Text,
        created_at -> BigInt,
        // weak reference to users.id
        created_by -> Nullable<Text>,
        title -> Text,
        description -> Text,
        address -> Text,
        lat -> Double,
        lng -> Double,
        wifi_available -> Bool,
        power_outlets -> Bool,
        laptop_friendly -> Bool,
        noise_level -> Nullable<SmallInt>,
        opening_hours -> Nullable<Text>,
        current_status -> SmallInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Verifications
///////////////////////////////////////////////////////////////////////

table! {
    place_verifications (rowid) {
        rowid -> BigInt,
        id -> Text,
        // weak reference to places.id
        place_id -> Text,
        // weak reference to users.id
        user_id -> Text,
        proof_link -> Text,
        admin_notes -> Nullable<Text>,
        status -> SmallInt,
        created_at -> BigInt,
    }
}
