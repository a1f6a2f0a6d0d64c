//! Extended dictionaries: longer, more specific term lists.
//!
//! Terms may carry accents; they are normalized together with the text
//! before matching.

use super::{Category, Language, TermTable};

pub(super) const TABLES: &[(Language, TermTable)] = &[
    (Language::Es, ES),
    (Language::En, EN),
    (Language::De, DE),
];

const ES: TermTable = &[
    (
        Category::Delays,
        &[
            "retraso", "tarde", "demora", "espera", "lento", "horario", "cerrado", "detenido",
            "cancelacion",
        ],
    ),
    (
        Category::Hygiene,
        &[
            "sucio", "suciedad", "limpieza", "olor", "pegajoso", "pegajosa", "papelera",
            "resbaladizo", "resbaladiza",
        ],
    ),
    (
        Category::Comfort,
        &["aire", "calor", "frio", "asiento", "seguro", "calefaccion", "equipaje", "altura"],
    ),
    (
        Category::Infrastructure,
        &[
            "puerta", "averia", "falla", "roto", "frenos", "ruido", "vias", "mantenimiento",
            "iluminacion", "daño", "guia", "bicicleta", "ascensor", "enchufe", "anuncio", "rampa",
            "accesibilidad", "emergencia", "señal", "movilidad",
        ],
    ),
    (
        Category::Service,
        &[
            "grosero", "personal", "taquilla", "tarjeta", "cobro", "informa", "reserva", "estres",
            "tono", "confusion", "formulario", "billete", "duda", "compensacion", "megafonia",
            "app",
        ],
    ),
    (
        Category::User,
        &["perdido", "vandalismo", "agresiva", "accident", "sospechoso", "disturbio"],
    ),
];

const EN: TermTable = &[
    (
        Category::Delays,
        &[
            "delay", "late", "wait", "slow", "schedule", "closed", "stopped", "stuck", "cancelled",
            "cancellation",
        ],
    ),
    (
        Category::Hygiene,
        &[
            "dirty", "filth", "cleaning", "smell", "odor", "sticky", "bin", "trash", "slippery",
        ],
    ),
    (
        Category::Comfort,
        &[
            "air", "heat", "hot", "cold", "seat", "safe", "safety", "heating", "luggage",
            "baggage", "height", "headroom",
        ],
    ),
    (
        Category::Infrastructure,
        &[
            "door", "breakdown", "failure", "fault", "broken", "brakes", "noise", "loud", "track",
            "rails", "maintenance", "lighting", "lights", "damage", "guide", "bicycle", "bike",
            "elevator", "lift", "plug", "socket", "outlet", "announcement", "ramp",
            "accessibility", "emergency", "signal", "sign", "mobility",
        ],
    ),
    (
        Category::Service,
        &[
            "rude", "staff", "personnel", "counter", "office", "card", "charge", "payment", "info",
            "information", "booking", "reservation", "stress", "tone", "confusion", "form",
            "ticket", "doubt", "question", "compensation", "refund", "loudspeaker", "pa system",
            "app",
        ],
    ),
    (
        Category::User,
        &["lost", "vandalism", "aggressive", "accident", "suspicious", "disturbance"],
    ),
];

const DE: TermTable = &[
    (
        Category::Delays,
        &[
            "verspätung", "spät", "warten", "verzögerung", "langsam", "fahrplan", "geschlossen",
            "gestoppt", "angehalten", "ausfall", "stornierung",
        ],
    ),
    (
        Category::Hygiene,
        &[
            "schmutzig", "dreckig", "schmutz", "reinigung", "sauberkeit", "geruch", "stinken",
            "klebrig", "mülleimer", "abfall", "rutschig", "mull",
        ],
    ),
    (
        Category::Comfort,
        &[
            "luft", "klimaanlage", "hitze", "warm", "kalt", "kälte", "sitz", "sitzplatz", "sicher",
            "sicherheit", "heizung", "gepäck", "koffer", "höhe",
        ],
    ),
    (
        Category::Infrastructure,
        &[
            "tür", "panne", "defekt", "fehler", "störung", "kaputt", "bremse", "lärm", "laut",
            "gleis", "schiene", "wartung", "beleuchtung", "licht", "schaden", "beschädigt",
            "führer", "fahrrad", "aufzug", "fahrstuhl", "steckdose", "ansage", "durchsage",
            "rampe", "barrierefreiheit", "notfall", "signal", "schild", "mobilität",
            "anzeigetafeln", "lift", "aüsfalle", "blockiert",
        ],
    ),
    (
        Category::Service,
        &[
            "unfreundlich", "grob", "personal", "mitarbeiter", "schalter", "karte", "gebühr",
            "zahlung", "info", "auskunft", "reservierung", "stress", "ton", "verwirrung",
            "formular", "fahrkarte", "ticket", "zweifel", "frage", "entschädigung", "erstattung",
            "lautsprecher", "app", "unklarheiten", "personen", "buchung", "tarifzonen",
            "maulkorbregel",
        ],
    ),
    (
        Category::User,
        &[
            "verloren", "vandalismus", "aggressiv", "unfall", "verdächtig", "störung", "unruhe",
            "verlust", "randalierende",
        ],
    ),
];
