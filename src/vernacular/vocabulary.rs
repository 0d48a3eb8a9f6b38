//! Closed word lists driving the base-name rules.
//!
//! Matching against every list is case-insensitive. Entries are literal text,
//! a space inside an entry matches any run of whitespace.

/// Anatomical and descriptive nouns that head a `de <noun>` clause.
pub const BODY_PART_NOUNS: &[&str] = &[
    "bosque",
    "pies",
    "vientre",
    "cabeza",
    "dorso",
    "ojos",
    "patas",
    "garganta",
    "hocico",
    "labios",
    "muslos",
    "flancos",
    "manos",
    "ingles",
    "espalda",
    "piel",
    "cola",
    "brazos",
    "axilas",
    "membranas",
    "discos",
    "tímpano",
    "iris",
    "mejillas",
    "párpados",
    "nariz",
    "pecho",
    "costados",
    "lomo",
    "manchas",
    "puntos",
    "bandas",
];

/// Descriptors that form a compound base with the preceding `de`
/// ("Rana de cristal", "Rana de dedos delgados").
pub const COMPOUND_DESCRIPTORS: &[&str] = &["cristal", "casco", "dedos delgados", "espuma"];

/// Single-word descriptors that are part of a base name and survive a
/// trailing `de <Lugar>` being removed.
pub const SIMPLE_DESCRIPTORS: &[&str] = &[
    "hojarasquero",
    "arlequín",
    "espinosa",
    "torrentícola",
    "venenosa",
    "arbórea",
    "cohete",
    "gladiadora",
    "gomosa",
    "verde",
    "ágil",
    "amazónica",
    "nodriza",
    "dedilarga",
    "bullanguero",
    "listada",
    "marsupial",
    "hoja",
];

/// Generic species-type nouns. Together with [`SIMPLE_DESCRIPTORS`] they end
/// a base name that may be followed by one stray word.
pub const BASE_TERMS: &[&str] = &[
    "de charco",
    "Ilulo",
    "Sapo",
    "Sapito",
    "Cutín",
    "Cutin",
    "Rana",
    "Ranita",
    "Salamandra",
    "Kayla",
    "Pipa",
    "Smilisca",
    "hocicuda",
];

/// Places kept after `del` when a single word trails them.
pub const PLACE_NOUNS: &[&str] = &[
    "bosque",
    "Norte",
    "Chocó",
    "Cóndor",
    "Gualaceño",
    "Alto Amazonas",
];

/// Places that are never stripped as a trailing `del <Lugar>` clause.
pub const PROTECTED_PLACES: &[&str] = &[
    "Cóndor",
    "Norte",
    "Padre",
    "Alto Amazonas",
    "Gualaceño",
    "Chocó",
    "bosque",
];

/// Multi-word modifiers removed when they close the name.
pub const COMPOUND_MODIFIERS: &[&str] = &[
    "amazónico variable",
    "cabeza grande",
    "diablo andino",
    "gigante moteado",
    "de cinco líneas",
    "de ojos rojos",
    "de tres rayas",
    "de dos colores",
    "de labio blanco",
    "de vientre amarillo",
    "de flancos amarillos",
    "de puntos blancos",
    "de espalda roja",
    "de lunares",
    "hocico largo",
    "hocico corto",
    "cola larga",
    "ojos grandes",
    "patas largas",
    "de montaña",
];

/// Purely descriptive adjectives (colour, size, texture, temperament,
/// broad geography) removed when they are the last word.
pub const DESCRIPTIVE_ADJECTIVES: &[&str] = &[
    "adornado",
    "adornada",
    "andino",
    "andina",
    "negro",
    "negra",
    "gigante",
    "moteado",
    "moteada",
    "rugoso",
    "rugosa",
    "azul",
    "amarillo",
    "amarilla",
    "rojo",
    "roja",
    "blanco",
    "blanca",
    "verde",
    "pardo",
    "parda",
    "gris",
    "dorado",
    "dorada",
    "naranja",
    "rosado",
    "rosada",
    "pintado",
    "pintada",
    "manchado",
    "manchada",
    "rayado",
    "rayada",
    "punteado",
    "punteada",
    "jaspeado",
    "jaspeada",
    "grande",
    "pequeño",
    "pequeña",
    "enano",
    "enana",
    "diminuto",
    "diminuta",
    "robusto",
    "robusta",
    "delgado",
    "delgada",
    "esbelto",
    "esbelta",
    "liso",
    "lisa",
    "granuloso",
    "granulosa",
    "verrugoso",
    "verrugosa",
    "tuberculado",
    "tuberculada",
    "cornudo",
    "cornuda",
    "elegante",
    "hermoso",
    "hermosa",
    "bonito",
    "bonita",
    "variable",
    "occidental",
    "oriental",
    "amazónico",
    "costero",
    "costera",
    "montano",
    "montana",
    "peruano",
    "peruana",
    "ecuatoriano",
    "ecuatoriana",
    "colombiano",
    "colombiana",
    "tímido",
    "tímida",
    "críptico",
    "críptica",
    "ruidoso",
    "ruidosa",
    "oscuro",
    "oscura",
    "brillante",
    "iridiscente",
    "transparente",
    "llamativo",
    "llamativa",
];

/// Proper-noun and ethnonym qualifiers removed when they close the name.
pub const ETHNONYM_MODIFIERS: &[&str] =
    &["Kichwa", "Tsáchila", "Jambato", "Zápara", "Príncipe Carlos"];
