//! LST Format Text Grammar
//!
//! This module documents the text accepted and produced by the format managers
//! of this crate.
//!
//! # Overview
//!
//! Every field of an LST rule file is plain text interpreted by the manager of
//! the field's format. There is no quoting layer shared between formats: each
//! manager sees exactly the characters between the field's delimiters.
//!
//! # Identifiers
//!
//! Formats are named by identifier:
//!
//! ```text
//! identifier       ::= leaf-identifier | array-identifier
//! leaf-identifier  ::= "BOOLEAN" | "STRING" | "NUMBER" | registered-name
//! array-identifier ::= "ARRAY[" identifier "]"
//! ```
//!
//! **Rules**:
//! - Identifiers are compared case-insensitively by [`FormatLibrary`](crate::FormatLibrary)
//!   and reported upper-case by the managers
//! - Identifiers are non-empty and never contain whitespace
//! - A leaf identifier is unique within a library
//!
//! # Leaf Values
//!
//! | Format | Value | Accepted | Produced |
//! |--------|-------|----------|----------|
//! | `BOOLEAN` | `bool` | `true`, `false` in any case | `true`, `false` |
//! | `STRING` | `String` | any text, including empty | the text unchanged |
//! | `NUMBER` | [`Number`](crate::Number) | a 64-bit integer, else a finite decimal float | shortest form; whole floats keep `.0` |
//!
//! **Examples**:
//! ```text
//! TRUE        -> true          -> "true"
//! -3          -> Integer(-3)   -> "-3"
//! 1.4         -> Float(1.4)    -> "1.4"
//! 2.0         -> Float(2.0)    -> "2.0"
//! NaN         -> error (non-finite)
//! 1d6         -> error
//! ```
//!
//! A number is read as an integer when it fits one, so `5` and `5.0` convert
//! to different values.
//!
//! # Arrays
//!
//! ```text
//! array-instruction ::= "" | item (SEP item)*
//! ```
//!
//! - `SEP` is the single separator character fixed when the array manager is
//!   built. A library picks it from [`FormatOptions`](crate::FormatOptions) by
//!   nesting depth
//! - The empty instruction is the empty array
//! - Every other instruction splits on every occurrence of `SEP`. Empty items
//!   are kept and handed to the component, so `1,,2` and `1,2,` hold an empty
//!   item. A `NUMBER` array rejects them, a `STRING` array keeps `""`
//! - Output joins the items' text with `SEP` and no padding
//!
//! **Examples** (separator `,`):
//! ```text
//! ""          -> []
//! "1"         -> [1]
//! "-3,4.1,5"  -> [-3, 4.1, 5]
//! "1,x,3"     -> error at item 1; no partial array
//! ```
//!
//! ## Nested Arrays
//!
//! An array of arrays needs a different separator per level. With `|` outside
//! and `,` inside:
//!
//! ```text
//! "1,2|3|"    -> [[1, 2], [3], []]
//! ```
//!
//! # Deferred Forms
//!
//! `convert_indirect` and `convert_object_container` accept the same text as
//! `convert`. Their serialized form (`unconverted`, `lst_format`) is the text
//! of the items as each item's own container renders it, joined with the
//! separator. For leaves this is the original text, so `TRUE` stays `TRUE`
//! rather than becoming `true`.
//!
//! # Limitations
//!
//! - **No escaping**: an array item can never contain its array's separator
//! - **Lossy empty strings**: a `STRING` array holding one empty string
//!   serializes to the empty instruction, which converts back to `[]`
//! - **No absent text**: `None` is rejected by leaf managers; array managers
//!   read it as the empty array
//! - **Integer range**: integers outside the 64-bit range are read as floats
