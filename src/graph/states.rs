// states.rs
// ──────────────────────────────────────────────────────────────────────────────
// Land borders between the 50 US states (water-only borders excluded).
// Alaska and Hawaii have no land neighbors and only ever appear in chains of
// length one.
// ──────────────────────────────────────────────────────────────────────────────

/// One row of an adjacency table: a state, its postal code and the names of
/// the states it borders, in the order they are explored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateEntry {
    pub name: &'static str,
    pub code: &'static str,
    pub neighbors: &'static [&'static str],
}

/// Shorthand used to keep the table below readable.
pub const fn entry(
    name: &'static str,
    code: &'static str,
    neighbors: &'static [&'static str],
) -> StateEntry {
    StateEntry {
        name,
        code,
        neighbors,
    }
}

/// The embedded adjacency table, in declaration order.
pub const US_STATES: &[StateEntry] = &[
    entry("Alabama", "AL", &["Mississippi", "Tennessee", "Florida", "Georgia"]),
    entry("Alaska", "AK", &[]),
    entry("Arizona", "AZ", &["Nevada", "New Mexico", "Utah", "California", "Colorado"]),
    entry(
        "Arkansas",
        "AR",
        &[
            "Oklahoma",
            "Tennessee",
            "Texas",
            "Louisiana",
            "Mississippi",
            "Missouri",
        ],
    ),
    entry("California", "CA", &["Oregon", "Arizona", "Nevada"]),
    entry(
        "Colorado",
        "CO",
        &[
            "New Mexico",
            "Oklahoma",
            "Utah",
            "Wyoming",
            "Arizona",
            "Kansas",
            "Nebraska",
        ],
    ),
    entry("Connecticut", "CT", &["New York", "Rhode Island", "Massachusetts"]),
    entry("Delaware", "DE", &["New Jersey", "Pennsylvania", "Maryland"]),
    entry("Florida", "FL", &["Georgia", "Alabama"]),
    entry(
        "Georgia",
        "GA",
        &[
            "North Carolina",
            "South Carolina",
            "Tennessee",
            "Alabama",
            "Florida",
        ],
    ),
    entry("Hawaii", "HI", &[]),
    entry("Idaho", "ID", &["Utah", "Washington", "Wyoming", "Montana", "Nevada", "Oregon"]),
    entry("Illinois", "IL", &["Kentucky", "Missouri", "Wisconsin", "Indiana", "Iowa", "Michigan"]),
    entry("Indiana", "IN", &["Michigan", "Ohio", "Illinois", "Kentucky"]),
    entry(
        "Iowa",
        "IA",
        &[
            "Nebraska",
            "South Dakota",
            "Wisconsin",
            "Illinois",
            "Minnesota",
            "Missouri",
        ],
    ),
    entry("Kansas", "KS", &["Nebraska", "Oklahoma", "Colorado", "Missouri"]),
    entry(
        "Kentucky",
        "KY",
        &[
            "Tennessee",
            "Virginia",
            "West Virginia",
            "Illinois",
            "Indiana",
            "Missouri",
            "Ohio",
        ],
    ),
    entry("Louisiana", "LA", &["Texas", "Arkansas", "Mississippi"]),
    entry("Maine", "ME", &["New Hampshire"]),
    entry("Maryland", "MD", &["Virginia", "West Virginia", "Delaware", "Pennsylvania"]),
    entry(
        "Massachusetts",
        "MA",
        &[
            "New York",
            "Rhode Island",
            "Vermont",
            "Connecticut",
            "New Hampshire",
        ],
    ),
    entry("Michigan", "MI", &["Ohio", "Wisconsin", "Illinois", "Indiana"]),
    entry("Minnesota", "MN", &["North Dakota", "South Dakota", "Wisconsin", "Iowa"]),
    entry("Mississippi", "MS", &["Louisiana", "Tennessee", "Alabama", "Arkansas"]),
    entry(
        "Missouri",
        "MO",
        &[
            "Nebraska",
            "Oklahoma",
            "Tennessee",
            "Arkansas",
            "Illinois",
            "Iowa",
            "Kansas",
            "Kentucky",
        ],
    ),
    entry("Montana", "MT", &["South Dakota", "Wyoming", "Idaho", "North Dakota"]),
    entry("Nebraska", "NE", &["Missouri", "South Dakota", "Wyoming", "Colorado", "Iowa", "Kansas"]),
    entry("Nevada", "NV", &["Idaho", "Oregon", "Utah", "Arizona", "California"]),
    entry("New Hampshire", "NH", &["Vermont", "Maine", "Massachusetts"]),
    entry("New Jersey", "NJ", &["Pennsylvania", "Delaware", "New York"]),
    entry("New Mexico", "NM", &["Oklahoma", "Texas", "Utah", "Arizona", "Colorado"]),
    entry(
        "New York",
        "NY",
        &[
            "Pennsylvania",
            "Vermont",
            "Connecticut",
            "Massachusetts",
            "New Jersey",
        ],
    ),
    entry("North Carolina", "NC", &["Tennessee", "Virginia", "Georgia", "South Carolina"]),
    entry("North Dakota", "ND", &["South Dakota", "Minnesota", "Montana"]),
    entry("Ohio", "OH", &["Michigan", "Pennsylvania", "West Virginia", "Indiana", "Kentucky"]),
    entry("Oklahoma", "OK", &["Missouri", "New Mexico", "Texas", "Arkansas", "Colorado", "Kansas"]),
    entry("Oregon", "OR", &["Nevada", "Washington", "California", "Idaho"]),
    entry(
        "Pennsylvania",
        "PA",
        &[
            "New York",
            "Ohio",
            "West Virginia",
            "Delaware",
            "Maryland",
            "New Jersey",
        ],
    ),
    entry("Rhode Island", "RI", &["Massachusetts", "Connecticut"]),
    entry("South Carolina", "SC", &["North Carolina", "Georgia"]),
    entry(
        "South Dakota",
        "SD",
        &[
            "Nebraska",
            "North Dakota",
            "Wyoming",
            "Iowa",
            "Minnesota",
            "Montana",
        ],
    ),
    entry(
        "Tennessee",
        "TN",
        &[
            "Mississippi",
            "Missouri",
            "North Carolina",
            "Virginia",
            "Alabama",
            "Arkansas",
            "Georgia",
            "Kentucky",
        ],
    ),
    entry("Texas", "TX", &["New Mexico", "Oklahoma", "Arkansas", "Louisiana"]),
    entry("Utah", "UT", &["Nevada", "New Mexico", "Wyoming", "Arizona", "Colorado", "Idaho"]),
    entry("Vermont", "VT", &["New Hampshire", "New York", "Massachusetts"]),
    entry(
        "Virginia",
        "VA",
        &[
            "North Carolina",
            "Tennessee",
            "West Virginia",
            "Kentucky",
            "Maryland",
        ],
    ),
    entry("Washington", "WA", &["Oregon", "Idaho"]),
    entry("West Virginia", "WV", &["Pennsylvania", "Virginia", "Kentucky", "Maryland", "Ohio"]),
    entry("Wisconsin", "WI", &["Michigan", "Minnesota", "Illinois", "Iowa"]),
    entry("Wyoming", "WY", &["Nebraska", "South Dakota", "Utah", "Colorado", "Idaho", "Montana"]),
];
