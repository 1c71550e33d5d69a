use crate::highlight::Syntax;

/// Go, including its predeclared identifiers.
pub static GO: Syntax = Syntax {
    keywords: &[
        "append", "bool", "break", "byte", "cap", "case", "chan", "close", "complex",
        "complex128", "complex64", "const", "continue", "copy", "default", "defer", "delete",
        "else", "error", "fallthrough", "false", "float32", "float64", "for", "func", "go", "goto",
        "if", "imag", "import", "int", "int16", "int32", "int64", "int8", "interface", "len",
        "make", "map", "new", "nil", "package", "panic", "range", "real", "recover", "return",
        "rune", "select", "string", "struct", "switch", "true", "type", "uint", "uint16", "uint32",
        "uint64", "uint8", "uintptr", "var",
    ],
    single_line_comment: "//",
    multi_line_comment_start: "/*",
    multi_line_comment_end: "*/",
};
