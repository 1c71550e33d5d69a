use crate::highlight::Syntax;

/// C and C++.
pub static C: Syntax = Syntax {
    keywords: &[
        "#define", "#include", "NULL", "auto", "break", "case", "char", "const", "continue",
        "default", "do", "double", "else", "enum", "extern", "float", "for", "goto", "if", "int",
        "long", "register", "return", "short", "signed", "sizeof", "static", "struct", "switch",
        "typedef", "union", "unsigned", "void", "volatile", "while",
    ],
    single_line_comment: "//",
    multi_line_comment_start: "/*",
    multi_line_comment_end: "*/",
};
