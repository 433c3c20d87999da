//! Built-in language units.
//!
//! Each unit is a pair of static `(localized, canonical)` tables. The
//! `BUILTIN_UNITS` table is the registration point: adding a language means
//! adding its tables here and one `BuiltinUnit` entry.

use crate::languages::LanguageModule;

/// A language unit compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinUnit {
    /// ISO 639-1 language code (e.g., "en", "fr")
    pub code: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Localized directive name -> canonical directive name
    pub directives: &'static [(&'static str, &'static str)],

    /// Localized role name -> canonical role name
    pub roles: &'static [(&'static str, &'static str)],
}

impl BuiltinUnit {
    /// Build an owned `LanguageModule` from the static tables.
    pub fn to_module(&self) -> LanguageModule {
        LanguageModule::from_pairs(self.code, self.directives, self.roles)
    }
}

/// Every canonical directive name a unit may map onto.
pub const CANONICAL_DIRECTIVES: &[&str] = &[
    "attention",
    "caution",
    "code",
    "danger",
    "error",
    "important",
    "note",
    "tip",
    "hint",
    "warning",
    "admonition",
    "sidebar",
    "topic",
    "line-block",
    "parsed-literal",
    "rubric",
    "epigraph",
    "highlights",
    "pull-quote",
    "compound",
    "container",
    "table",
    "csv-table",
    "list-table",
    "math",
    "meta",
    "image",
    "figure",
    "include",
    "raw",
    "replace",
    "unicode",
    "date",
    "class",
    "role",
    "default-role",
    "title",
    "contents",
    "sectnum",
    "header",
    "footer",
    "target-notes",
];

/// Every canonical role name a unit may map onto.
pub const CANONICAL_ROLES: &[&str] = &[
    "abbreviation",
    "acronym",
    "code",
    "index",
    "subscript",
    "superscript",
    "title-reference",
    "pep-reference",
    "rfc-reference",
    "emphasis",
    "strong",
    "literal",
    "math",
    "named-reference",
    "anonymous-reference",
    "footnote-reference",
    "citation-reference",
    "substitution-reference",
    "target",
    "uri-reference",
    "raw",
];

// ==================== English ====================

const ENGLISH_DIRECTIVES: &[(&str, &str)] = &[
    ("attention", "attention"),
    ("caution", "caution"),
    ("code", "code"),
    ("code-block", "code"),
    ("sourcecode", "code"),
    ("danger", "danger"),
    ("error", "error"),
    ("important", "important"),
    ("note", "note"),
    ("tip", "tip"),
    ("hint", "hint"),
    ("warning", "warning"),
    ("admonition", "admonition"),
    ("sidebar", "sidebar"),
    ("topic", "topic"),
    ("line-block", "line-block"),
    ("parsed-literal", "parsed-literal"),
    ("rubric", "rubric"),
    ("epigraph", "epigraph"),
    ("highlights", "highlights"),
    ("pull-quote", "pull-quote"),
    ("compound", "compound"),
    ("container", "container"),
    ("table", "table"),
    ("csv-table", "csv-table"),
    ("list-table", "list-table"),
    ("math", "math"),
    ("meta", "meta"),
    ("image", "image"),
    ("figure", "figure"),
    ("include", "include"),
    ("raw", "raw"),
    ("replace", "replace"),
    ("unicode", "unicode"),
    ("date", "date"),
    ("class", "class"),
    ("role", "role"),
    ("default-role", "default-role"),
    ("title", "title"),
    ("contents", "contents"),
    ("sectnum", "sectnum"),
    ("section-numbering", "sectnum"),
    ("header", "header"),
    ("footer", "footer"),
    ("target-notes", "target-notes"),
];

const ENGLISH_ROLES: &[(&str, &str)] = &[
    ("abbreviation", "abbreviation"),
    ("ab", "abbreviation"),
    ("acronym", "acronym"),
    ("ac", "acronym"),
    ("code", "code"),
    ("index", "index"),
    ("i", "index"),
    ("subscript", "subscript"),
    ("sub", "subscript"),
    ("superscript", "superscript"),
    ("sup", "superscript"),
    ("title-reference", "title-reference"),
    ("title", "title-reference"),
    ("t", "title-reference"),
    ("pep-reference", "pep-reference"),
    ("pep", "pep-reference"),
    ("rfc-reference", "rfc-reference"),
    ("rfc", "rfc-reference"),
    ("emphasis", "emphasis"),
    ("strong", "strong"),
    ("literal", "literal"),
    ("math", "math"),
    ("named-reference", "named-reference"),
    ("anonymous-reference", "anonymous-reference"),
    ("footnote-reference", "footnote-reference"),
    ("citation-reference", "citation-reference"),
    ("substitution-reference", "substitution-reference"),
    ("target", "target"),
    ("uri-reference", "uri-reference"),
    ("uri", "uri-reference"),
    ("url", "uri-reference"),
    ("raw", "raw"),
];

// ==================== German ====================

const GERMAN_DIRECTIVES: &[(&str, &str)] = &[
    ("achtung", "attention"),
    ("vorsicht", "caution"),
    ("code", "code"),
    ("gefahr", "danger"),
    ("fehler", "error"),
    ("hinweis", "hint"),
    ("wichtig", "important"),
    ("notiz", "note"),
    ("tipp", "tip"),
    ("warnung", "warning"),
    ("ermahnung", "admonition"),
    ("kasten", "sidebar"),
    ("seitenkasten", "sidebar"),
    ("thema", "topic"),
    ("zeilen-block", "line-block"),
    ("parsed-literal", "parsed-literal"),
    ("rubrik", "rubric"),
    ("epigraph", "epigraph"),
    ("highlights", "highlights"),
    ("pull-quote", "pull-quote"),
    ("zusammengesetzt", "compound"),
    ("verbund", "compound"),
    ("container", "container"),
    ("tabelle", "table"),
    ("csv-tabelle", "csv-table"),
    ("listentabelle", "list-table"),
    ("mathe", "math"),
    ("formel", "math"),
    ("meta", "meta"),
    ("bild", "image"),
    ("abbildung", "figure"),
    ("unverändert", "raw"),
    ("roh", "raw"),
    ("einfügen", "include"),
    ("ersetzung", "replace"),
    ("ersetzen", "replace"),
    ("ersetze", "replace"),
    ("unicode", "unicode"),
    ("datum", "date"),
    ("klasse", "class"),
    ("rolle", "role"),
    ("standardrolle", "default-role"),
    ("titel", "title"),
    ("inhalt", "contents"),
    ("kapitelnummerierung", "sectnum"),
    ("abschnittsnummerierung", "sectnum"),
    ("linkziel-fußnoten", "target-notes"),
    ("kopfzeilen", "header"),
    ("fußzeilen", "footer"),
];

const GERMAN_ROLES: &[(&str, &str)] = &[
    ("abkürzung", "abbreviation"),
    ("akronym", "acronym"),
    ("code", "code"),
    ("index", "index"),
    ("tiefgestellt", "subscript"),
    ("hochgestellt", "superscript"),
    ("titel-referenz", "title-reference"),
    ("pep-referenz", "pep-reference"),
    ("rfc-referenz", "rfc-reference"),
    ("betonung", "emphasis"),
    ("betont", "emphasis"),
    ("fett", "strong"),
    ("wörtlich", "literal"),
    ("mathe", "math"),
    ("benannte-referenz", "named-reference"),
    ("unbenannte-referenz", "anonymous-reference"),
    ("fußnoten-referenz", "footnote-reference"),
    ("zitat-referenz", "citation-reference"),
    ("ersetzungs-referenz", "substitution-reference"),
    ("ziel", "target"),
    ("uri-referenz", "uri-reference"),
    ("roh", "raw"),
];

// ==================== Spanish ====================

const SPANISH_DIRECTIVES: &[(&str, &str)] = &[
    ("atención", "attention"),
    ("atencion", "attention"),
    ("precaución", "caution"),
    ("precaucion", "caution"),
    ("código", "code"),
    ("codigo", "code"),
    ("peligro", "danger"),
    ("error", "error"),
    ("sugerencia", "hint"),
    ("importante", "important"),
    ("nota", "note"),
    ("consejo", "tip"),
    ("advertencia", "warning"),
    ("exhortacion", "admonition"),
    ("exhortación", "admonition"),
    ("nota-al-margen", "sidebar"),
    ("tema", "topic"),
    ("bloque-de-lineas", "line-block"),
    ("bloque-de-líneas", "line-block"),
    ("literal-evaluado", "parsed-literal"),
    ("firma", "rubric"),
    ("epígrafe", "epigraph"),
    ("epigrafe", "epigraph"),
    ("destacado", "highlights"),
    ("cita-destacada", "pull-quote"),
    ("combinacion", "compound"),
    ("combinación", "compound"),
    ("contenedor", "container"),
    ("tabla", "table"),
    ("tabla-csv", "csv-table"),
    ("tabla-lista", "list-table"),
    ("matemáticas", "math"),
    ("meta", "meta"),
    ("imagen", "image"),
    ("figura", "figure"),
    ("incluir", "include"),
    ("sin-analisis", "raw"),
    ("sin-análisis", "raw"),
    ("reemplazar", "replace"),
    ("unicode", "unicode"),
    ("fecha", "date"),
    ("clase", "class"),
    ("rol", "role"),
    ("rol-por-omision", "default-role"),
    ("rol-por-omisión", "default-role"),
    ("titulo", "title"),
    ("título", "title"),
    ("contenido", "contents"),
    ("numseccion", "sectnum"),
    ("numsección", "sectnum"),
    ("numeracion-seccion", "sectnum"),
    ("numeración-sección", "sectnum"),
    ("notas-destino", "target-notes"),
    ("cabecera", "header"),
    ("pie", "footer"),
];

const SPANISH_ROLES: &[(&str, &str)] = &[
    ("abreviatura", "abbreviation"),
    ("ab", "abbreviation"),
    ("acronimo", "acronym"),
    ("acrónimo", "acronym"),
    ("ac", "acronym"),
    ("código", "code"),
    ("indice", "index"),
    ("índice", "index"),
    ("i", "index"),
    ("subindice", "subscript"),
    ("subíndice", "subscript"),
    ("superindice", "superscript"),
    ("superíndice", "superscript"),
    ("referencia-titulo", "title-reference"),
    ("titulo", "title-reference"),
    ("t", "title-reference"),
    ("referencia-pep", "pep-reference"),
    ("pep", "pep-reference"),
    ("referencia-rfc", "rfc-reference"),
    ("rfc", "rfc-reference"),
    ("enfasis", "emphasis"),
    ("énfasis", "emphasis"),
    ("destacado", "strong"),
    ("literal", "literal"),
    ("matemáticas", "math"),
    ("referencia-con-nombre", "named-reference"),
    ("referencia-anonima", "anonymous-reference"),
    ("referencia-anónima", "anonymous-reference"),
    ("referencia-nota-al-pie", "footnote-reference"),
    ("referencia-cita", "citation-reference"),
    ("referencia-sustitucion", "substitution-reference"),
    ("referencia-sustitución", "substitution-reference"),
    ("destino", "target"),
    ("referencia-uri", "uri-reference"),
    ("uri", "uri-reference"),
    ("url", "uri-reference"),
    ("sin-analisis", "raw"),
    ("sin-análisis", "raw"),
];

// ==================== French ====================

const FRENCH_DIRECTIVES: &[(&str, &str)] = &[
    ("attention", "attention"),
    ("précaution", "caution"),
    ("code", "code"),
    ("danger", "danger"),
    ("erreur", "error"),
    ("conseil", "hint"),
    ("important", "important"),
    ("note", "note"),
    ("astuce", "tip"),
    ("avertissement", "warning"),
    ("admonition", "admonition"),
    ("encadré", "sidebar"),
    ("sujet", "topic"),
    ("bloc-textuel", "line-block"),
    ("bloc-interprété", "parsed-literal"),
    ("code-interprété", "parsed-literal"),
    ("intertitre", "rubric"),
    ("exergue", "epigraph"),
    ("épigraphe", "epigraph"),
    ("chapeau", "highlights"),
    ("accroche", "pull-quote"),
    ("compound", "compound"),
    ("conteneur", "container"),
    ("tableau", "table"),
    ("csv-table", "csv-table"),
    ("list-table", "list-table"),
    ("math", "math"),
    ("méta", "meta"),
    ("image", "image"),
    ("figure", "figure"),
    ("inclure", "include"),
    ("brut", "raw"),
    ("remplacer", "replace"),
    ("remplace", "replace"),
    ("unicode", "unicode"),
    ("date", "date"),
    ("classe", "class"),
    ("role", "role"),
    ("rôle", "role"),
    ("rôle-par-défaut", "default-role"),
    ("titre", "title"),
    ("sommaire", "contents"),
    ("table-des-matières", "contents"),
    ("sectnum", "sectnum"),
    ("section-numérotée", "sectnum"),
    ("liens", "target-notes"),
    ("en-tête", "header"),
    ("pied-de-page", "footer"),
];

const FRENCH_ROLES: &[(&str, &str)] = &[
    ("abréviation", "abbreviation"),
    ("acronyme", "acronym"),
    ("sigle", "acronym"),
    ("code", "code"),
    ("index", "index"),
    ("indice", "subscript"),
    ("ind", "subscript"),
    ("exposant", "superscript"),
    ("exp", "superscript"),
    ("titre-référence", "title-reference"),
    ("titre", "title-reference"),
    ("pep-référence", "pep-reference"),
    ("rfc-référence", "rfc-reference"),
    ("emphase", "emphasis"),
    ("fort", "strong"),
    ("littéral", "literal"),
    ("math", "math"),
    ("nommée-référence", "named-reference"),
    ("anonyme-référence", "anonymous-reference"),
    ("note-référence", "footnote-reference"),
    ("citation-référence", "citation-reference"),
    ("substitution-référence", "substitution-reference"),
    ("lien", "target"),
    ("uri-référence", "uri-reference"),
    ("brut", "raw"),
];

/// Registration table of all built-in language units.
pub const BUILTIN_UNITS: &[BuiltinUnit] = &[
    BuiltinUnit {
        code: "en",
        name: "English",
        directives: ENGLISH_DIRECTIVES,
        roles: ENGLISH_ROLES,
    },
    BuiltinUnit {
        code: "de",
        name: "German",
        directives: GERMAN_DIRECTIVES,
        roles: GERMAN_ROLES,
    },
    BuiltinUnit {
        code: "es",
        name: "Spanish",
        directives: SPANISH_DIRECTIVES,
        roles: SPANISH_ROLES,
    },
    BuiltinUnit {
        code: "fr",
        name: "French",
        directives: FRENCH_DIRECTIVES,
        roles: FRENCH_ROLES,
    },
];

/// Find a built-in unit by its exact code.
pub fn find_builtin(code: &str) -> Option<&'static BuiltinUnit> {
    BUILTIN_UNITS.iter().find(|unit| unit.code == code)
}
