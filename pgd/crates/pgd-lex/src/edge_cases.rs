//! Edge case tests for pgd-lex
