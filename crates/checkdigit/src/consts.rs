use regex::Regex;
use std::sync::LazyLock;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Unicode is disabled so that `\w` and the case-insensitive `[a-z]` stay ASCII-only
// (no Kelvin sign matching `k`). The `check` group only participates when the body is
// followed by one extra character, which is how an existing check digit is detected.
regex!(
    RECORD_NUMBER_REGEX,
    r"(?i-u)^(?P<fore>\.?[a-z]?)(?P<number>[0-9]{6,7})(?P<check>[0-9x])?(?P<aft>@\w{1,5})?$"
);
