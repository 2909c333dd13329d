// Pronunciation dictionary for stress lookup
// Maps words to per-syllable stress patterns over {'0','1','2'}

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Failed to read dictionary file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dictionary file contained no valid entries: {0}")]
    Empty(String),
}

/// Word → stress-pattern lookup table
///
/// Patterns are strings over '0' (unstressed), '1' (primary stress) and
/// '2' (secondary stress), one character per syllable. Lookups are
/// case-insensitive. The table is immutable once built.
#[derive(Debug, Clone, Default)]
pub struct StressDictionary {
    entries: HashMap<String, String>,
}

impl StressDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        StressDictionary {
            entries: HashMap::new(),
        }
    }

    /// Parse dictionary entries from `word pattern` lines
    ///
    /// One entry per line, word and pattern separated by whitespace.
    /// Lines starting with '#' and blank lines are skipped. Malformed
    /// lines are skipped with a warning rather than failing the parse.
    pub fn from_entries(text: &str) -> Self {
        let mut entries = HashMap::new();

        for (idx, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut parts = trimmed.split_whitespace();
            let word = parts.next();
            let pattern = parts.next();

            match (word, pattern) {
                (Some(word), Some(pattern)) if is_valid_pattern(pattern) => {
                    entries.insert(word.to_lowercase(), pattern.to_string());
                }
                _ => {
                    log::warn!("Skipping malformed dictionary line {}: {:?}", idx + 1, trimmed);
                }
            }
        }

        StressDictionary { entries }
    }

    /// The embedded starter lexicon of common English words
    pub fn builtin() -> Self {
        StressDictionary::from_entries(BUILTIN_ENTRIES)
    }

    /// Load a dictionary from a file on disk
    ///
    /// The host application should await this once at startup and pass the
    /// result to [`install`] before issuing lookups.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        let dict = StressDictionary::from_entries(&contents);

        if dict.is_empty() {
            return Err(DictionaryError::Empty(path.display().to_string()));
        }

        log::info!("Loaded {} dictionary entries from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Look up the stress pattern for a word (case-insensitive)
    /// Returns None for words not in the dictionary
    pub fn stress_pattern_for(&self, word: &str) -> Option<&str> {
        if word.is_empty() {
            return None;
        }

        self.entries.get(&word.to_lowercase()).map(|s| s.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Patterns must be non-empty strings over {'0','1','2'}
fn is_valid_pattern(pattern: &str) -> bool {
    !pattern.is_empty() && pattern.chars().all(|c| matches!(c, '0' | '1' | '2'))
}

static INSTALLED: OnceLock<StressDictionary> = OnceLock::new();

lazy_static::lazy_static! {
    static ref BUILTIN: StressDictionary = StressDictionary::builtin();
}

/// Install a loaded dictionary as the process-wide lookup table
///
/// Only the first install takes effect; later calls are ignored with a
/// warning. Returns whether the dictionary was installed.
pub fn install(dict: StressDictionary) -> bool {
    match INSTALLED.set(dict) {
        Ok(()) => true,
        Err(_) => {
            log::warn!("Stress dictionary already installed; ignoring");
            false
        }
    }
}

/// The process-wide dictionary: the installed one, or the builtin lexicon
pub fn dictionary() -> &'static StressDictionary {
    INSTALLED.get().unwrap_or(&BUILTIN)
}

/// Builtin starter lexicon
///
/// Stress digits follow CMU dictionary conventions: function words are
/// unstressed, content monosyllables carry primary stress, longer words
/// carry their lexical stress contour.
const BUILTIN_ENTRIES: &str = "\
# function words
the 0
a 0
an 0
of 0
to 0
and 0
in 0
on 0
at 0
by 0
for 0
with 0
from 0
as 0
but 0
or 0
nor 0
so 0
if 0
is 0
am 0
are 0
was 0
were 0
be 0
been 0
it 0
its 0
he 0
she 0
we 0
us 0
you 0
your 0
my 0
me 0
i 1
they 0
them 0
his 0
her 0
that 0
this 0
then 0
than 0
when 0
where 1
while 1
not 1
no 1
do 0
did 0
does 0
has 0
have 0
had 0
will 0
would 0
shall 0
should 0
can 0
could 0
may 0
might 0
must 0
there 0
here 1
thee 1
thou 1
thy 0
o 1
oh 1
up 1
out 1
all 1
more 1
most 1
some 0
one 1
two 1
three 1
# content monosyllables
love 1
heart 1
night 1
day 1
light 1
dark 1
moon 1
sun 1
star 1
stars 1
sky 1
sea 1
wind 1
rain 1
snow 1
rose 1
bird 1
birds 1
song 1
songs 1
dream 1
dreams 1
death 1
life 1
time 1
soul 1
eyes 1
tears 1
joy 1
pain 1
hope 1
fear 1
grief 1
gold 1
spring 1
world 1
breath 1
fire 1
earth 1
dawn 1
dusk 1
sleep 1
wake 1
sweet 1
bright 1
cold 1
warm 1
deep 1
soft 1
still 1
fair 1
long 1
lost 1
old 1
young 1
dead 1
free 1
sad 1
glad 1
green 1
blue 1
red 1
white 1
black 1
grey 1
wave 1
waves 1
leaf 1
leaves 1
tree 1
trees 1
field 1
fields 1
stone 1
voice 1
word 1
words 1
hand 1
hands 1
face 1
grace 1
peace 1
war 1
blood 1
bone 1
home 1
road 1
path 1
hill 1
vale 1
mist 1
frost 1
storm 1
calm 1
falls 1
drifts 1
brings 1
sails 1
through 0
# two syllables, trochaic
summer 10
winter 10
morning 10
evening 10
garden 10
flower 10
river 10
mountain 10
shadow 10
shadows 10
silence 10
silent 10
golden 10
silver 10
happy 10
lonely 10
sorrow 10
beauty 10
heaven 10
spirit 10
music 10
singing 10
dancing 10
weeping 10
gentle 10
tender 10
darkness 10
children 10
mother 10
father 10
water 10
ocean 10
forest 10
meadow 10
whisper 10
thunder 10
lightning 10
autumn 10
blossom 10
wonder 10
sadness 10
gladness 10
sunset 10
sunrise 10
twilight 10
ancient 10
broken 10
falling 10
rising 10
burning 10
frozen 10
weary 10
hollow 10
sacred 10
dying 10
living 10
lover 10
angel 10
heavy 10
quiet 10
lonesome 10
distant 10
# two syllables, iambic
away 01
alone 01
again 01
above 01
below 01
beyond 01
before 01
behind 01
between 01
tonight 01
today 01
delight 01
despair 01
desire 01
embrace 01
forget 01
forgive 01
return 01
arise 01
awake 01
around 01
among 01
because 01
become 01
begin 01
behold 01
until 01
upon 01
within 01
without 01
along 01
adieu 01
afar 01
aglow 01
# secondary stress
midnight 12
moonlight 12
sunlight 12
starlight 12
butterfly 102
yesterday 102
evermore 102
nevermore 102
# three syllables
beautiful 100
wonderful 100
terrible 100
memory 100
melody 100
harmony 100
destiny 100
ecstasy 100
reverie 100
emotion 010
remember 010
together 010
forever 010
tomorrow 010
eternal 010
immortal 010
creation 010
devotion 010
reflection 010
horizon 010
surrender 010
# four syllables
eternity 0100
infinity 0100
serenity 0100
melancholy 1020
solitary 1020
ordinary 1020
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let dict = StressDictionary::builtin();
        assert_eq!(dict.stress_pattern_for("the"), Some("0"));
        assert_eq!(dict.stress_pattern_for("love"), Some("1"));
        assert_eq!(dict.stress_pattern_for("shadow"), Some("10"));
        assert_eq!(dict.stress_pattern_for("away"), Some("01"));
        assert_eq!(dict.stress_pattern_for("beautiful"), Some("100"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dict = StressDictionary::builtin();
        assert_eq!(dict.stress_pattern_for("LOVE"), Some("1"));
        assert_eq!(dict.stress_pattern_for("Shadow"), Some("10"));
    }

    #[test]
    fn test_missing_word_returns_none() {
        let dict = StressDictionary::builtin();
        assert_eq!(dict.stress_pattern_for("zyzzyva"), None);
        assert_eq!(dict.stress_pattern_for(""), None);
    }

    #[test]
    fn test_from_entries_skips_malformed_lines() {
        let text = "good 10\n# comment\n\nbadpattern 3x\nwordonly\nfine 01";
        let dict = StressDictionary::from_entries(text);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.stress_pattern_for("good"), Some("10"));
        assert_eq!(dict.stress_pattern_for("fine"), Some("01"));
        assert_eq!(dict.stress_pattern_for("badpattern"), None);
    }

    #[test]
    fn test_secondary_stress_preserved() {
        let dict = StressDictionary::builtin();
        assert_eq!(dict.stress_pattern_for("midnight"), Some("12"));
    }

    #[test]
    fn test_second_install_is_ignored() {
        // Installing the builtin keeps lookups identical for every other
        // test regardless of ordering; only the return value matters here
        let first = install(StressDictionary::builtin());
        let second = install(StressDictionary::builtin());
        assert!(first);
        assert!(!second);
        assert_eq!(dictionary().stress_pattern_for("love"), Some("1"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        use std::io::Write;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("stress.dict");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "# test dictionary").unwrap();
        writeln!(file, "raven 10").unwrap();
        writeln!(file, "lenore 01").unwrap();
        drop(file);

        let dict = StressDictionary::load(&path).await.unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.stress_pattern_for("raven"), Some("10"));
        assert_eq!(dict.stress_pattern_for("LENORE"), Some("01"));
    }

    #[tokio::test]
    async fn test_load_empty_file_is_error() {
        use std::io::Write;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.dict");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "# nothing but comments").unwrap();
        drop(file);

        let result = StressDictionary::load(&path).await;
        assert!(matches!(result, Err(DictionaryError::Empty(_))));
    }
}
