//! Quick-add dishes offered above the order form.

/// Dishes the waiter can add with a single tap, in display order.
pub const PRESET_DISHES: [&str; 10] = [
    "Linguine alle vongole",
    "Linguine frutti di mare",
    "Penne all'arrabbiata",
    "Penne zola e noci",
    "Penne al sugo baby",
    "Tagliata alle verdure",
    "Tagliata con patatine",
    "Patatine fritte",
    "Olive ascolane",
    "Anelli di cipolla",
];
