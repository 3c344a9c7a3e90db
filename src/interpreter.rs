/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST by structural recursion and reduces it to
/// a single integer. It is the final stage of interpretation and performs no
/// mutation of the tree it is given.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing checked addition and subtraction.
/// - Reports integer overflow as a runtime error.
pub mod evaluator;
/// The lexer module tokenizes an expression for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces an ordered
/// sequence of tokens: integer literals, the `+` and `-` operators, and
/// parentheses. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their byte index.
/// - Greedily consumes digit runs into single integer literal tokens.
/// - Reports invalid characters and oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs a tree of literals and binary operations. Parenthesized
/// sub-expressions are located by explicit nesting-depth counting and parsed
/// recursively.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the flat two-operand grammar, reporting errors with position.
/// - Matches nested parentheses by depth, not by first closing candidate.
pub mod parser;
