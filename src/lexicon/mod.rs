//! Embedded Portuguese lexicon
//!
//! A fixture word list backing the offline service: five-letter words in
//! unaccented uppercase, sorted for binary search, plus the accented display
//! forms for the words that carry diacritics.

/// Board width of every embedded word
pub const WORD_LENGTH: usize = 5;

/// Five-letter Portuguese words, unaccented uppercase, sorted
pub const WORDS: &[&str] = &[
    "ABRIL", "ACESO", "AGUDO", "AINDA", "ALGAS", "ALMAS", "ALTAR", "AMIGO", "ANDAR", "ANEIS",
    "ANJOS", "ARARA", "AREIA", "ARROZ", "ASTRO", "ATLAS", "AVIAO", "AZEDO", "AZUIS", "BANCO",
    "BARCO", "BEBER", "BEIJO", "BICHO", "BOLSA", "BRAVO", "BRISA", "BRUXA", "CAIXA", "CALMA",
    "CAMPO", "CANTO", "CARRO", "CASAL", "CASAS", "CAUSA", "CEDRO", "CHAVE", "CHUVA", "CINZA",
    "CLARO", "COBRA", "COISA", "COMER", "CORPO", "CULTO", "CURVA", "DANCA", "DEDOS", "DENTE",
    "DOCES", "DRAMA", "DUETO", "ETICA", "FALAR", "FAROL", "FESTA", "FLUXO", "FOLHA", "FORCA",
    "FRUTA", "FUNDO", "GALHO", "GAROA", "GATOS", "GENRO", "GLOBO", "GRAMA", "GRAVE", "HEROI",
    "HOTEL", "ILHAS", "IRMAO", "JANTA", "JOGOS", "JOVEM", "JUIZO", "LAPIS", "LARGO", "LEITE",
    "LENTO", "LIDES", "LIMAO", "LIVRO", "LOUCO", "LUGAR", "LUZES", "MAGIA", "MANGA", "MANHA",
    "MARCA", "MESAS", "METRO", "MIOLO", "MOTOR", "MUNDO", "MUSGO", "NAVIO", "NINHO", "NOITE",
    "NOIVA", "NUVEM", "OBRAS", "OLHOS", "ONTEM", "OUTRO", "PAPEL", "PASTA", "PEDRA", "PEIXE",
    "PENAS", "PIANO", "PLUMA", "POEMA", "POETA", "PONTE", "PORTA", "PRADO", "PRAIA", "PRATO",
    "PROVA", "QUASE", "QUEDA", "RADIO", "RAMOS", "REDES", "RISCO", "ROUPA", "SABOR", "SALTO",
    "SAUDE", "SIGLA", "SINAL", "SONHO", "SORTE", "TARDE", "TEMPO", "TERMO", "TERRA", "TIGRE",
    "TINTA", "TOCHA", "TRIGO", "TROCO", "TUNEL", "UNIAO", "URSOS", "VAPOR", "VELAS", "VENTO",
    "VERAO", "VERDE", "VERSO", "VIDRO", "VINHO", "VOZES", "ZEBRA",
];

/// Accented display forms, keyed by the unaccented word, sorted by key
pub const ACCENTED: &[(&str, &str)] = &[
    ("ANEIS", "ANÉIS"),
    ("AVIAO", "AVIÃO"),
    ("DANCA", "DANÇA"),
    ("ETICA", "ÉTICA"),
    ("FORCA", "FORÇA"),
    ("HEROI", "HERÓI"),
    ("IRMAO", "IRMÃO"),
    ("JUIZO", "JUÍZO"),
    ("LAPIS", "LÁPIS"),
    ("LIMAO", "LIMÃO"),
    ("MANHA", "MANHÃ"),
    ("RADIO", "RÁDIO"),
    ("SAUDE", "SAÚDE"),
    ("TUNEL", "TÚNEL"),
    ("UNIAO", "UNIÃO"),
    ("VERAO", "VERÃO"),
];

/// Membership check against the embedded list
///
/// Expects unaccented input; case-insensitive.
#[must_use]
pub fn contains(word: &str) -> bool {
    let upper = word.to_uppercase();
    WORDS.binary_search(&upper.as_str()).is_ok()
}

/// Accented display form of an embedded word, if it has one
#[must_use]
pub fn accented(word: &str) -> Option<&'static str> {
    let upper = word.to_uppercase();
    ACCENTED
        .binary_search_by_key(&upper.as_str(), |(base, _)| base)
        .ok()
        .map(|i| ACCENTED[i].1)
}
