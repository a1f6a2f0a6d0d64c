//! Compact dictionaries: few, broad terms (often stems) per category.

use super::{Category, Language, TermTable};

pub(super) const TABLES: &[(Language, TermTable)] = &[
    (Language::Es, ES),
    (Language::En, EN),
    (Language::De, DE),
    (Language::Fr, FR),
];

const ES: TermTable = &[
    (Category::Punctuality, &["punt", "retraso", "demora", "espera", "horario"]),
    (Category::Hygiene, &["limpieza", "limpio"]),
    (
        Category::Comfort,
        &["aire", "calor", "frio", "asiento", "seguro", "calefaccion", "equipaje", "altura"],
    ),
    (
        Category::Infrastructure,
        &[
            "puerta", "falla", "iluminacion", "guia", "bicicleta", "ascensor", "enchufe",
            "anuncio", "rampa", "accesibilidad", "emergencia", "seña", "movilidad",
        ],
    ),
    (
        Category::Service,
        &[
            "buen", "personal", "taquilla", "tarjeta", "cobro", "informa", "reserva", "amable",
            "formulario", "duda", "compensacion", "app",
        ],
    ),
];

const EN: TermTable = &[
    (Category::Punctuality, &["punctuality", "delay", "waiting", "schedule"]),
    (Category::Hygiene, &["cleanliness", "clean"]),
    (
        Category::Comfort,
        &["air", "heat", "cold", "seat", "safe", "heating", "luggage", "height"],
    ),
    (
        Category::Infrastructure,
        &[
            "door", "failure", "lighting", "guide", "bicycle", "elevator", "outlet",
            "announcement", "ramp", "accessibility", "emergency", "signal", "mobility",
        ],
    ),
    (
        Category::Service,
        &[
            "good", "staff", "ticket office", "card", "charge", "inform", "reservation",
            "friendly", "form", "doubt", "compensation", "app", "personal",
        ],
    ),
];

const DE: TermTable = &[
    (Category::Punctuality, &["punktlichkeit", "verspatung", "warten", "fahrplan"]),
    (Category::Hygiene, &["sauberkeit", "sauber"]),
    (
        Category::Comfort,
        &["luft", "hitze", "kaelte", "sitz", "sicher", "heizung", "gepack", "hoehe"],
    ),
    (
        Category::Infrastructure,
        &[
            "tuer", "fehler", "beleuchtung", "leitung", "fahrrad", "aufzug", "steckdose",
            "ansage", "rampe", "barrierefreiheit", "notfall", "signal", "mobilitat",
        ],
    ),
    (
        Category::Service,
        &[
            "gut", "personal", "schalter", "karte", "gebuhr", "information", "reservierung",
            "freundlich", "formular", "zweifel", "entschadigung", "app", "lob",
        ],
    ),
];

const FR: TermTable = &[
    (Category::Punctuality, &["ponctualite", "retard", "attente", "horaire"]),
    (Category::Hygiene, &["hygiene", "propre"]),
    (
        Category::Comfort,
        &["air", "chaleur", "froid", "siege", "sur", "chauffage", "bagage", "hauteur"],
    ),
    (
        Category::Infrastructure,
        &[
            "porte", "panne", "eclairage", "guide", "velo", "ascenseur", "prise", "annonce",
            "rampe", "accessibilite", "urgence", "signal", "mobilite",
        ],
    ),
    (
        Category::Service,
        &[
            "bon", "personnel", "guichet", "carte", "frais", "information", "reservation",
            "aimable", "formulaire", "doute", "compensation", "app",
        ],
    ),
];
