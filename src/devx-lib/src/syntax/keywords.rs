use lazy_static::lazy_static;
use std::collections::HashSet;

// Each table mixes reserved words with a few standard-library names that the
// editor styles as keywords (`print`, `len`, `console`, `String`, ...).

pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield", "self", "cls", "print", "range", "len", "type", "int",
    "str", "float", "list", "dict", "set", "bool", "tuple",
];

pub const KOTLIN_KEYWORDS: &[&str] = &[
    "abstract", "actual", "as", "break", "by", "catch", "class", "companion", "const",
    "constructor", "continue", "crossinline", "data", "delegate", "do", "dynamic", "else",
    "enum", "expect", "external", "false", "field", "file", "final", "finally", "for", "fun",
    "get", "if", "import", "in", "infix", "init", "inline", "inner", "interface", "internal",
    "is", "it", "lateinit", "noinline", "null", "object", "open", "operator", "out",
    "override", "package", "param", "private", "property", "protected", "public", "reified",
    "return", "sealed", "set", "super", "suspend", "tailrec", "this", "throw", "true", "try",
    "typealias", "typeof", "val", "value", "var", "vararg", "when", "where", "while",
    // common types
    "Int", "Long", "Float", "Double", "Boolean", "String", "Unit", "Any", "Nothing", "List",
    "Map", "Set", "MutableList", "MutableMap", "Flow",
];

pub const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "atomic_cancel", "atomic_commit",
    "atomic_noexcept", "auto", "bitand", "bitor", "bool", "break", "case", "catch", "char",
    "char8_t", "char16_t", "char32_t", "class", "compl", "concept", "const", "consteval",
    "constexpr", "constinit", "const_cast", "continue", "co_await", "co_return", "co_yield",
    "decltype", "default", "delete", "do", "double", "dynamic_cast", "else", "enum",
    "explicit", "export", "extern", "false", "float", "for", "friend", "goto", "if", "inline",
    "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr",
    "operator", "or", "or_eq", "private", "protected", "public", "reflexpr", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq", "std", "cout", "cin",
    "vector", "string",
];

pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
    "throw", "throws", "transient", "try", "void", "volatile", "while", "true", "false",
    "null", "String", "System",
];

pub const JAVASCRIPT_KEYWORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for",
    "function", "if", "import", "in", "instanceof", "new", "null", "return", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with",
    "yield", "let", "static", "arguments", "async", "console", "log", "window", "document",
];

lazy_static! {
    pub static ref PYTHON_KEYWORD_SET: HashSet<&'static str> = to_set(PYTHON_KEYWORDS);
    pub static ref KOTLIN_KEYWORD_SET: HashSet<&'static str> = to_set(KOTLIN_KEYWORDS);
    pub static ref CPP_KEYWORD_SET: HashSet<&'static str> = to_set(CPP_KEYWORDS);
    pub static ref JAVA_KEYWORD_SET: HashSet<&'static str> = to_set(JAVA_KEYWORDS);
    pub static ref JAVASCRIPT_KEYWORD_SET: HashSet<&'static str> = to_set(JAVASCRIPT_KEYWORDS);
}

fn to_set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}
