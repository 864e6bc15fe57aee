//! Fixed content catalogs cycled by the advisory and category generators.
//!
//! Advisory text follows the Alberta film classification advisories. Rows are
//! not invented freeform: generators walk these catalogs with `i % len`, so
//! every generated row carries one of a small fixed set of descriptions while
//! still getting a fresh sequential id.

/// Canonical content advisories as (short description, full description).
pub const ADVISORIES: [(&str, &str); 17] = [
    (
        "Coarse Language",
        "Contains profanity, expletives, vulgar expressions, threats, slurs, sexual references or sexual innuendo.",
    ),
    (
        "Language May Offend",
        "Contains language that may be offensive to some groups. It may include sacrilegious language, slurs or vulgar expressions.",
    ),
    (
        "Violence",
        "Contains scenes of violence, which could range from mild hand-to-hand combat to detailed portrayals of torture, depending upon the rating of the film.",
    ),
    (
        "Frightening Scenes",
        "Contains images that may frighten a person, or are clearly intended to shock or scare.",
    ),
    (
        "Brutal Violence",
        "Contains detailed portrayals of violence that may include extreme brutality, bloody or gory violence, and may include images of torture, horror or war.",
    ),
    (
        "Gory Scenes",
        "Contains graphic images of bloody or gory violence, and may include images of torture, horror or war.",
    ),
    (
        "Sexual Violence",
        "Contains scenes of sexual violence, which could range from scenes of non-consensual sex acts to graphic portrayals of sexual assault, depending upon the rating of the film.",
    ),
    (
        "Nudity",
        "Contains breast, buttock, genital nudity. Nudity can be portrayed in a sexual or a non-sexual context.",
    ),
    (
        "Sexually Suggestive Scenes",
        "Contains scenes that imply, rather than show, that sexual activity is taking place or has occurred.",
    ),
    (
        "Sexual Content",
        "Contains sexual language, references, innuendo, and/or scenes of implied or simulated sexual activity.",
    ),
    (
        "Explicit Sexual Content",
        "Contains sexual activity that is explicit and unsimulated, as in adult films that involve actual genital contact.",
    ),
    (
        "Crude Content",
        "Contains crude portrayals of bodily functions.",
    ),
    (
        "Substance Abuse",
        "Contains excessive alcohol use or the use of illegal substances.",
    ),
    (
        "Not Recommended For Young Children",
        "May be inappropriate for young children. For example, the subject matter could include the death of a family pet, a complicated family breakdown or images considered frightening or disturbing for the very young.",
    ),
    (
        "Not Recommended For Children",
        "May include scenes that reflect a more mature situation, such as drug use or abuse.",
    ),
    (
        "Mature Subject Matter",
        "Contains scenes or themes that may be upsetting or troubling to some. The film may contain portrayals of sexual violence, torture, deviant behaviour or cruelty.",
    ),
    (
        "Disturbing Content",
        "Contains images or storylines that may be challenging for minors. The film may contain portrayals of domestic violence, racism, religious matters, death or controversial social issues.",
    ),
];

/// Genre names cycled by the category generator.
pub const CATEGORIES: [&str; 11] = [
    "Action",
    "Comedy",
    "Drama",
    "Horror",
    "Romance",
    "Sci-Fi",
    "Documentary",
    "Thriller",
    "Animation",
    "Fantasy",
    "Musical",
];
