/*!
 * Prompt templates for the editorial pipeline.
 *
 * Templates are written in Polish, the language of the articles being edited.
 * Placeholders use `{name}` syntax and are filled by `PromptTemplate::render`.
 */

/// Maximum length of a single quote, in characters
pub const QUOTE_MAX_CHARS: usize = 200;
/// Maximum length of a single title proposal, in characters
pub const TITLE_MAX_CHARS: usize = 150;
/// Maximum length of a single lead proposal, in characters
pub const LEAD_MAX_CHARS: usize = 200;
/// Maximum length of a generated section heading, in characters
pub const HEADING_MAX_CHARS: usize = 80;

/// How many quotes are requested per chunk
pub const QUOTES_PER_CHUNK: usize = 3;
/// How many tags may be picked from the fixed vocabulary
pub const TAGS_FROM_LIST_COUNT: usize = 3;
/// How many free-form tags are requested
pub const FREE_TAG_COUNT: usize = 5;

/// A prompt template with `{placeholder}` slots.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    pub const PROOFREAD: &'static str = r#"Jesteś doświadczonym korektorem.
Przeczytaj poniższy tekst i dokonaj korekty błędów interpunkcyjnych, ortograficznych,
gramatycznych i składniowych.
Fragment tekstu do analizy:"""{text}"""
W odpowiedzi podaj tylko sam poprawiony tekst."#;

    pub const SUMMARIZE: &'static str = r#"Jesteś doświadczonym redaktorem.
Przeczytaj poniższy tekst i napisz jego streszczenie.
Streszczenie nie może być dłuższe niż {max_length} znaków.
Tekst do analizy:"""{text}"""
W odpowiedzi podaj tylko samo streszczenie tekstu."#;

    pub const HEADING: &'static str = r#"Jesteś doświadczonym redaktorem.
Przeczytaj poniższy fragment tekstu i napisz dla niego krótki śródtytuł.
Śródtytuł nie może przekraczać {max_length} znaków.
Fragment tekstu do analizy:"""{text}"""
W odpowiedzi podaj tylko sam śródtytuł."#;

    pub const QUOTES: &'static str = r#"Jesteś doświadczonym redaktorem.
Przeczytaj poniższy tekst i wybierz z niego {count} cytaty,
które mogą być najbardziej interesujące dla czytelników.
Jeden cytat nie może przekraczać {max_length} znaków.
Tekst do analizy:"""{text}"""
W odpowiedzi wypisz tylko same wybrane cytaty, każdy w osobnej linii."#;

    pub const TITLES: &'static str = r#"Jesteś doświadczonym redaktorem.
Przeczytaj poniższe streszczenie i napisz {count} propozycje
interesującego i przyciągającego uwagę tytułu.
Długość jednego tytułu nie może przekraczać {max_length} znaków.
Streszczenie tekstu do analizy:"""{text}"""
W odpowiedzi wypisz tylko same tytuły, każdy w osobnej linii."#;

    pub const LEADS: &'static str = r#"Jesteś doświadczonym redaktorem.
Przeczytaj poniższe streszczenie i napisz {count} propozycje
interesującego i przyciągającego uwagę leadu.
Długość jednego leadu nie może przekraczać {max_length} znaków.
Streszczenie tekstu do analizy:"""{text}"""
W odpowiedzi wypisz tylko same leady, każdy w osobnej linii."#;

    pub const TAGS_FROM_LIST: &'static str = r#"Jesteś doświadczonym redaktorem.
Przeczytaj poniższe streszczenie i wybierz maksymalnie {count} tagi z listy,
które najlepiej opisują tekst.
Lista tagów: {tags}
Streszczenie tekstu do analizy:"""{text}"""
W odpowiedzi wypisz tylko wybrane tagi z listy, każdy w osobnej linii."#;

    pub const TAGS: &'static str = r#"Jesteś doświadczonym redaktorem.
Przeczytaj poniższe streszczenie i zaproponuj {count} tagów opisujących tekst.
Żaden z tagów nie może pochodzić z tej listy: {tags}
Streszczenie tekstu do analizy:"""{text}"""
W odpowiedzi wypisz tylko same tagi, każdy w osobnej linii."#;

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Render the template, replacing each `{key}` with its value.
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        vars.iter().fold(self.template.clone(), |rendered, (key, value)| {
            rendered.replace(&format!("{{{}}}", key), value)
        })
    }
}

/// Soft summary length for one chunk: `budget / (chunk_count + 1)` characters
pub fn summary_target_length(budget_chars: usize, chunk_count: usize) -> usize {
    budget_chars / (chunk_count + 1)
}

pub fn proofread_prompt(text: &str) -> String {
    PromptTemplate::new(PromptTemplate::PROOFREAD).render(&[("text", text)])
}

pub fn summarize_prompt(text: &str, max_length: usize) -> String {
    let max_length = max_length.to_string();
    PromptTemplate::new(PromptTemplate::SUMMARIZE)
        .render(&[("max_length", max_length.as_str()), ("text", text)])
}

pub fn heading_prompt(text: &str) -> String {
    let max_length = HEADING_MAX_CHARS.to_string();
    PromptTemplate::new(PromptTemplate::HEADING)
        .render(&[("max_length", max_length.as_str()), ("text", text)])
}

pub fn quotes_prompt(text: &str) -> String {
    let count = QUOTES_PER_CHUNK.to_string();
    let max_length = QUOTE_MAX_CHARS.to_string();
    PromptTemplate::new(PromptTemplate::QUOTES).render(&[
        ("count", count.as_str()),
        ("max_length", max_length.as_str()),
        ("text", text),
    ])
}

pub fn titles_prompt(summary: &str) -> String {
    let max_length = TITLE_MAX_CHARS.to_string();
    PromptTemplate::new(PromptTemplate::TITLES).render(&[
        ("count", "trzy"),
        ("max_length", max_length.as_str()),
        ("text", summary),
    ])
}

pub fn leads_prompt(summary: &str) -> String {
    let max_length = LEAD_MAX_CHARS.to_string();
    PromptTemplate::new(PromptTemplate::LEADS).render(&[
        ("count", "trzy"),
        ("max_length", max_length.as_str()),
        ("text", summary),
    ])
}

pub fn tags_from_list_prompt(summary: &str, vocabulary: &[String]) -> String {
    let count = TAGS_FROM_LIST_COUNT.to_string();
    let tags = vocabulary.join(", ");
    PromptTemplate::new(PromptTemplate::TAGS_FROM_LIST).render(&[
        ("count", count.as_str()),
        ("tags", tags.as_str()),
        ("text", summary),
    ])
}

pub fn tags_prompt(summary: &str, vocabulary: &[String]) -> String {
    let count = FREE_TAG_COUNT.to_string();
    let tags = vocabulary.join(", ");
    PromptTemplate::new(PromptTemplate::TAGS).render(&[
        ("count", count.as_str()),
        ("tags", tags.as_str()),
        ("text", summary),
    ])
}
