//! Built-in seed data and the corpora the quiz sessions run over.

use crate::deck::Deck;
use crate::error::CorpusError;
use crate::types::Card;
use serde::Serialize;

type SeedCard = (&'static str, &'static [&'static str], &'static str);

const SEED_DECKS: &[(&str, &[SeedCard])] = &[
    (
        "SpanishDeck1",
        &[
            ("Hablar", &["Hablo", "Hablas", "Habla"], "To Speak"),
            ("Comer", &["Como", "Comes", "Come"], "To Eat"),
            ("Beber", &["Bebo", "Bebes", "Bebe"], "To Drink"),
            ("Vivir", &["Vivo", "Vives", "Vive"], "To Live"),
            ("Correr", &["Corro", "Corres", "Corre"], "To Run"),
            ("Leer", &["Leo", "Lees", "Lee"], "To Read"),
            ("Escribir", &["Escribo", "Escribes", "Escribe"], "To Write"),
            ("Abrir", &["Abro", "Abres", "Abre"], "To Open"),
            ("Cerrar", &["Cierro", "Cierras", "Cierra"], "To Close"),
            ("Estudiar", &["Estudio", "Estudias", "Estudia"], "To Study"),
            ("Caminar", &["Camino", "Caminas", "Camina"], "To Walk"),
            ("Mirar", &["Miro", "Miras", "Mira"], "To Watch"),
            ("Oir", &["Oigo", "Oyes", "Oye"], "To Hear"),
            ("Traer", &["Traigo", "Traes", "Trae"], "To Bring"),
            ("Decir", &["Digo", "Dices", "Dice"], "To Say"),
            ("Dar", &["Doy", "Das", "Da"], "To Give"),
            ("Tomar", &["Tomo", "Tomas", "Toma"], "To Take"),
            ("Dormir", &["Duermo", "Duermes", "Duerme"], "To Sleep"),
            ("Venir", &["Vengo", "Vienes", "Viene"], "To Come"),
            ("Ir", &["Voy", "Vas", "Va"], "To Go"),
        ],
    ),
    (
        "SpanishDeck2",
        &[
            ("Cantar", &["Canto", "Cantas", "Canta"], "To Sing"),
            ("Escuchar", &["Escucho", "Escuchas", "Escucha"], "To Listen"),
            ("Ganar", &["Gano", "Ganas", "Gana"], "To Win"),
            ("Perder", &["Pierdo", "Pierdes", "Pierde"], "To Lose"),
            ("Saltar", &["Salto", "Saltas", "Salta"], "To Jump"),
            ("Nadar", &["Nado", "Nadas", "Nada"], "To Swim"),
            ("Comprar", &["Compro", "Compras", "Compra"], "To Buy"),
            ("Vender", &["Vendo", "Vendes", "Vende"], "To Sell"),
            ("Llevar", &["Llevo", "Llevas", "Lleva"], "To Carry"),
            ("Hacer", &["Hago", "Haces", "Hace"], "To Do/Make"),
            ("Pensar", &["Pienso", "Piensas", "Piensa"], "To Think"),
            ("Entender", &["Entiendo", "Entiendes", "Entiende"], "To Understand"),
            ("Conocer", &["Conozco", "Conoces", "Conoce"], "To Know"),
            ("Saber", &["Sé", "Sabes", "Sabe"], "To Know (Fact)"),
            ("Creer", &["Creo", "Crees", "Cree"], "To Believe"),
            ("Poder", &["Puedo", "Puedes", "Puede"], "To Be Able"),
            ("Querer", &["Quiero", "Quieres", "Quiere"], "To Want"),
            ("Amar", &["Amo", "Amas", "Ama"], "To Love"),
            ("Llegar", &["Llego", "Llegas", "Llega"], "To Arrive"),
            ("Salir", &["Salgo", "Sales", "Sale"], "To Leave"),
        ],
    ),
    (
        "SpanishDeck3",
        &[
            ("Ver", &["Veo", "Ves", "Ve"], "To See"),
            ("Tocar", &["Toco", "Tocas", "Toca"], "To Touch"),
            ("Correr", &["Corro", "Corres", "Corre"], "To Run"),
            ("Aprender", &["Aprendo", "Aprendes", "Aprende"], "To Learn"),
            ("Viajar", &["Viajo", "Viajas", "Viaja"], "To Travel"),
            ("Llorar", &["Lloro", "Lloras", "Llora"], "To Cry"),
            ("Reír", &["Río", "Ríes", "Ríe"], "To Laugh"),
            ("Cocinar", &["Cocino", "Cocinas", "Cocina"], "To Cook"),
            ("Bailar", &["Bailo", "Bailas", "Baila"], "To Dance"),
            ("Despertar", &["Despierto", "Despiertas", "Despierta"], "To Wake Up"),
            ("Acostar", &["Acuesto", "Acuestas", "Acuesta"], "To Go to Bed"),
            ("Rezar", &["Rezo", "Rezas", "Reza"], "To Pray"),
            ("Gritar", &["Grito", "Gritas", "Grita"], "To Shout"),
            ("Limpiar", &["Limpio", "Limpias", "Limpia"], "To Clean"),
            ("Luchar", &["Lucho", "Luchas", "Lucha"], "To Fight"),
            ("Trabajar", &["Trabajo", "Trabajas", "Trabaja"], "To Work"),
            ("Pagar", &["Pago", "Pagas", "Paga"], "To Pay"),
            ("Responder", &["Respondo", "Respondes", "Responde"], "To Respond"),
            ("Buscar", &["Busco", "Buscas", "Busca"], "To Search"),
            ("Encontrar", &["Encuentro", "Encuentras", "Encuentra"], "To Find"),
        ],
    ),
    (
        "SpanishDeck4",
        &[
            ("Casa", &["La casa"], "House (feminine)"),
            ("Perro", &["El perro", "La perra"], "Dog (masculine/feminine)"),
            ("Gato", &["El gato", "La gata"], "Cat (masculine/feminine)"),
            ("Mesa", &["La mesa"], "Table (feminine)"),
            ("Libro", &["El libro"], "Book (masculine)"),
            ("Silla", &["La silla"], "Chair (feminine)"),
            ("Niño", &["El niño", "La niña"], "Boy/Girl (masculine/feminine)"),
            ("Coche", &["El coche"], "Car (masculine)"),
            ("Flor", &["La flor"], "Flower (feminine)"),
            ("Amigo", &["El amigo", "La amiga"], "Friend (masculine/feminine)"),
            ("Puerta", &["La puerta"], "Door (feminine)"),
            ("Zapato", &["El zapato"], "Shoe (masculine)"),
            ("Manzana", &["La manzana"], "Apple (feminine)"),
            ("Sombrero", &["El sombrero"], "Hat (masculine)"),
            ("Cama", &["La cama"], "Bed (feminine)"),
            ("Pez", &["El pez"], "Fish (masculine)"),
            ("Reloj", &["El reloj"], "Clock (masculine)"),
            ("Ventana", &["La ventana"], "Window (feminine)"),
            ("Estudiante", &["El estudiante", "La estudiante"], "Student (masculine/feminine)"),
            ("Profesor", &["El profesor", "La profesora"], "Teacher (masculine/feminine)"),
        ],
    ),
    (
        "LatinDeck",
        &[
            ("Amo", &["Amo", "Amas", "Amat"], "To Love"),
            ("Porto", &["Porto", "Portas", "Portat"], "To Carry"),
            ("Specto", &["Specto", "Spectas", "Spectat"], "To Watch"),
            ("Audio", &["Audio", "Audis", "Audit"], "To Hear"),
            ("Voco", &["Voco", "Vocas", "Vocat"], "To Call"),
            ("Doceo", &["Doceo", "Doces", "Docet"], "To Teach"),
            ("Venio", &["Venio", "Venis", "Venit"], "To Come"),
            ("Maneo", &["Maneo", "Manes", "Manet"], "To Stay"),
            ("Capio", &["Capio", "Capis", "Capit"], "To Take"),
            ("Scribo", &["Scribo", "Scribis", "Scribit"], "To Write"),
            ("Lego", &["Lego", "Legis", "Legit"], "To Read"),
            ("Ambulo", &["Ambulo", "Ambulas", "Ambulat"], "To Walk"),
            ("Ludo", &["Ludo", "Ludis", "Ludit"], "To Play"),
            ("Curro", &["Curro", "Curris", "Currit"], "To Run"),
            ("Cogo", &["Cogo", "Cogis", "Cogit"], "To Collect"),
            ("Peto", &["Peto", "Petis", "Petit"], "To Seek"),
            ("Mitto", &["Mitto", "Mittis", "Mittit"], "To Send"),
            ("Duco", &["Duco", "Ducis", "Ducit"], "To Lead"),
            ("Sto", &["Sto", "Stas", "Stat"], "To Stand"),
            ("Ago", &["Ago", "Agis", "Agit"], "To Do"),
        ],
    ),
];

/// The decks shipped with the trainer, in registry order.
pub fn builtin_decks() -> Vec<Deck> {
    SEED_DECKS
        .iter()
        .map(|(language, cards)| {
            let mut deck = Deck::new(*language);
            for (word, conjugates, translation) in cards.iter() {
                let conjugates = conjugates.iter().map(|c| c.to_string()).collect();
                deck.add_card(Card::new(*word, conjugates, *translation));
            }
            deck
        })
        .collect()
}

/// Tokenized sentences with an aligned translation and three candidate
/// answers per token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchingCorpus {
    sentences: Vec<Vec<String>>,
    translations: Vec<Vec<String>>,
    choices: Vec<Vec<[String; 3]>>,
}

impl MatchingCorpus {
    /// Build a corpus from parallel sequences.
    ///
    /// Every sentence needs at least one token, one translation per token,
    /// and exactly three choices per token of which exactly one equals the
    /// translation.
    pub fn new(
        sentences: Vec<Vec<String>>,
        translations: Vec<Vec<String>>,
        choices: Vec<Vec<Vec<String>>>,
    ) -> Result<Self, CorpusError> {
        check_len("translations", sentences.len(), translations.len())?;
        check_len("choice sets", sentences.len(), choices.len())?;

        let mut checked = Vec::with_capacity(choices.len());
        for (s, ((tokens, answers), sets)) in sentences
            .iter()
            .zip(&translations)
            .zip(choices)
            .enumerate()
        {
            if tokens.is_empty() {
                return Err(CorpusError::EmptySentence { sentence: s });
            }
            check_len("sentence translations", tokens.len(), answers.len())?;
            check_len("sentence choice sets", tokens.len(), sets.len())?;

            let mut sentence_sets = Vec::with_capacity(sets.len());
            for (w, (set, answer)) in sets.into_iter().zip(answers).enumerate() {
                let found = set.len();
                let set: [String; 3] = set.try_into().map_err(|_| CorpusError::ChoiceCount {
                    sentence: s,
                    word: w,
                    found,
                })?;
                let hits = set.iter().filter(|c| *c == answer).count();
                if hits != 1 {
                    return Err(CorpusError::CorrectChoice {
                        sentence: s,
                        word: w,
                        found: hits,
                    });
                }
                sentence_sets.push(set);
            }
            checked.push(sentence_sets);
        }

        Ok(Self {
            sentences,
            translations,
            choices: checked,
        })
    }

    /// The three Spanish sentences of the built-in matching game.
    pub fn builtin() -> Self {
        let sentences = vec![
            strings(&["Yo", "hablo", "español."]),
            strings(&["Ellos", "comen", "pan."]),
            strings(&["Nosotros", "vivimos", "aquí."]),
        ];
        let translations = vec![
            strings(&["I", "speak", "Spanish"]),
            strings(&["They", "eat", "bread"]),
            strings(&["We", "live", "here"]),
        ];
        let choices = vec![
            vec![
                triple(["I", "You", "He"]),
                triple(["speak", "eat", "run"]),
                triple(["Spanish", "French", "English"]),
            ],
            vec![
                triple(["They", "Us", "We"]),
                triple(["eat", "drink", "sleep"]),
                triple(["bread", "milk", "water"]),
            ],
            vec![
                triple(["We", "You", "They"]),
                triple(["live", "eat", "drink"]),
                triple(["here", "there", "everywhere"]),
            ],
        ];
        Self {
            sentences,
            translations,
            choices,
        }
    }

    /// A corpus with no sentences.
    pub fn empty() -> Self {
        Self {
            sentences: Vec::new(),
            translations: Vec::new(),
            choices: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn sentence_len(&self, sentence: usize) -> usize {
        self.sentences.get(sentence).map_or(0, Vec::len)
    }

    /// Number of tokens across all sentences.
    pub fn total_tokens(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }

    pub fn token(&self, sentence: usize, word: usize) -> Option<&str> {
        self.sentences.get(sentence)?.get(word).map(String::as_str)
    }

    pub fn translation(&self, sentence: usize, word: usize) -> Option<&str> {
        self.translations.get(sentence)?.get(word).map(String::as_str)
    }

    pub fn choices(&self, sentence: usize, word: usize) -> Option<&[String; 3]> {
        self.choices.get(sentence)?.get(word)
    }
}

/// English sentences paired with the source-language tokens shown for each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceCorpus {
    english: Vec<String>,
    tokens: Vec<Vec<String>>,
}

impl SentenceCorpus {
    pub fn new(english: Vec<String>, tokens: Vec<Vec<String>>) -> Result<Self, CorpusError> {
        check_len("token sets", english.len(), tokens.len())?;
        Ok(Self { english, tokens })
    }

    /// The built-in "Sentences" walkthrough.
    pub fn builtin() -> Self {
        Self {
            english: strings(&[
                "I speak Spanish with my friend in the park.",
                "They eat bread and drink water while talking.",
                "We live in a big house near the mountains.",
            ]),
            tokens: vec![
                strings(&["Yo", "hablo", "español", "con", "mi", "amigo", "en", "el", "parque."]),
                strings(&["Ellos", "comen", "pan", "y", "beben", "agua", "mientras", "hablan."]),
                strings(&[
                    "Nosotros", "vivimos", "en", "una", "casa", "grande", "cerca", "de", "las",
                    "montañas.",
                ]),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.english.len()
    }

    pub fn is_empty(&self) -> bool {
        self.english.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(&str, &[String])> {
        let english = self.english.get(index)?;
        let tokens = self.tokens.get(index)?;
        Some((english.as_str(), tokens.as_slice()))
    }
}

fn check_len(field: &'static str, expected: usize, found: usize) -> Result<(), CorpusError> {
    if expected == found {
        Ok(())
    } else {
        Err(CorpusError::LengthMismatch {
            field,
            expected,
            found,
        })
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn triple(items: [&str; 3]) -> [String; 3] {
    items.map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_decks_match_seed_data() {
        let decks = builtin_decks();
        let names: Vec<&str> = decks.iter().map(Deck::language).collect();
        assert_eq!(
            names,
            vec!["SpanishDeck1", "SpanishDeck2", "SpanishDeck3", "SpanishDeck4", "LatinDeck"]
        );
        assert!(decks.iter().all(|d| d.len() == 20));

        let first = &decks[0].cards()[0];
        assert_eq!(first.word(), "Hablar");
        assert_eq!(first.conjugates(), ["Hablo", "Hablas", "Habla"]);
        assert_eq!(first.translation(), "To Speak");
    }

    #[test]
    fn builtin_matching_corpus_is_well_formed() {
        let corpus = MatchingCorpus::builtin();
        let rebuilt = MatchingCorpus::new(
            corpus.sentences.clone(),
            corpus.translations.clone(),
            corpus
                .choices
                .iter()
                .map(|sets| sets.iter().map(|set| set.to_vec()).collect())
                .collect(),
        );
        assert_eq!(rebuilt, Ok(corpus.clone()));
        assert_eq!(corpus.total_tokens(), 9);
        assert_eq!(corpus.token(0, 2), Some("español."));
        assert_eq!(corpus.translation(0, 2), Some("Spanish"));
    }

    #[test]
    fn rejects_misaligned_translations() {
        let result = MatchingCorpus::new(
            vec![strings(&["Yo", "hablo"])],
            vec![strings(&["I"])],
            vec![vec![strings(&["I", "You", "He"]), strings(&["speak", "eat", "run"])]],
        );
        assert_eq!(
            result,
            Err(CorpusError::LengthMismatch {
                field: "sentence translations",
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn rejects_wrong_choice_count() {
        let result = MatchingCorpus::new(
            vec![strings(&["Yo"])],
            vec![strings(&["I"])],
            vec![vec![strings(&["I", "You"])]],
        );
        assert_eq!(
            result,
            Err(CorpusError::ChoiceCount {
                sentence: 0,
                word: 0,
                found: 2,
            })
        );
    }

    #[test]
    fn rejects_missing_or_duplicate_correct_choice() {
        let missing = MatchingCorpus::new(
            vec![strings(&["Yo"])],
            vec![strings(&["I"])],
            vec![vec![strings(&["We", "You", "He"])]],
        );
        assert!(matches!(missing, Err(CorpusError::CorrectChoice { found: 0, .. })));

        let doubled = MatchingCorpus::new(
            vec![strings(&["Yo"])],
            vec![strings(&["I"])],
            vec![vec![strings(&["I", "I", "He"])]],
        );
        assert!(matches!(doubled, Err(CorpusError::CorrectChoice { found: 2, .. })));
    }

    #[test]
    fn rejects_empty_sentence() {
        let result = MatchingCorpus::new(vec![vec![]], vec![vec![]], vec![vec![]]);
        assert_eq!(result, Err(CorpusError::EmptySentence { sentence: 0 }));
    }

    #[test]
    fn sentence_corpus_requires_parallel_lengths() {
        let result = SentenceCorpus::new(strings(&["One.", "Two."]), vec![strings(&["Uno."])]);
        assert!(matches!(result, Err(CorpusError::LengthMismatch { .. })));

        let corpus = SentenceCorpus::builtin();
        assert_eq!(corpus.len(), 3);
        let (english, tokens) = corpus.get(2).unwrap();
        assert_eq!(english, "We live in a big house near the mountains.");
        assert_eq!(tokens.len(), 10);
    }
}
