//! Structs and logic to parse Newick strings into [GeneTree]s.
//!
//! The parser is a recursive-descent walk over a byte [Cursor]. Unlike
//! strictly binary Newick readers it accepts any positive number of children
//! per internal vertex, so multifurcations and unary chains parse as written.
//! Inner vertex names (often support values) are read and discarded.

use crate::model::tree::VertexIndex;
use crate::model::vertex::BranchLength;
use crate::model::GeneTree;
use crate::newick::error::{NewickError, NewickErrorKind};

/// Characters that end an unquoted label.
const LABEL_DELIMITERS: &[u8] = b" \t\n\r(),:;[]'";

// =#========================================================================#=
// CURSOR
// =#========================================================================#=
/// Byte cursor over an in-memory Newick source.
///
/// Tracks the current position for error reporting and provides the
/// low-level consume/skip operations the grammar functions build on.
pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn for_str(source: &'a str) -> Self {
        Cursor {
            bytes: source.as_bytes(),
            position: 0,
        }
    }

    /// Returns the current byte without consuming it.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.position).copied()
    }

    /// Returns `true` if the current byte equals `byte`.
    fn peek_is(&self, byte: u8) -> bool {
        self.peek() == Some(byte)
    }

    /// Consumes and returns the current byte.
    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.position += 1;
        Some(byte)
    }

    /// Consumes the current byte if it equals `byte`.
    fn consume_if(&mut self, byte: u8) -> bool {
        if self.peek_is(byte) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.position >= self.bytes.len()
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Returns up to `length` upcoming bytes as string for error context.
    pub(crate) fn context(&self, length: usize) -> String {
        let end = usize::min(self.position + length, self.bytes.len());
        String::from_utf8_lossy(&self.bytes[self.position..end]).into_owned()
    }

    /// Skips whitespace and `[...]` comments, in any number and order.
    ///
    /// # Errors
    /// [NewickErrorKind::UnclosedComment] if a `[` is never closed.
    pub(crate) fn skip_comment_and_whitespace(&mut self) -> Result<(), NewickError> {
        loop {
            match self.peek() {
                Some(byte) if byte.is_ascii_whitespace() => {
                    self.position += 1;
                }
                Some(b'[') => {
                    let comment_start = self.position;
                    let mut closed = false;
                    while let Some(byte) = self.next_byte() {
                        if byte == b']' {
                            closed = true;
                            break;
                        }
                    }
                    if !closed {
                        self.position = comment_start;
                        return Err(NewickError::from_cursor(
                            NewickErrorKind::UnclosedComment,
                            self,
                        ));
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Parses a label, either unquoted (ends at any delimiter) or single
    /// quoted with `''` as escaped quote. Quoted labels are unescaped;
    /// unquoted labels are taken verbatim, underscores included, since leaf
    /// names may encode fields separated by `_`.
    fn parse_label(&mut self) -> Result<String, NewickError> {
        if self.consume_if(b'\'') {
            return self.parse_quoted_label();
        }

        let start = self.position;
        while let Some(byte) = self.peek() {
            if LABEL_DELIMITERS.contains(&byte) {
                break;
            }
            self.position += 1;
        }

        if self.position == start {
            let next_char = self.peek().map(char::from);
            return Err(NewickError::from_cursor(
                NewickErrorKind::Invalid(format!("Expected a label but found {:?}", next_char)),
                self,
            ));
        }

        Ok(String::from_utf8_lossy(&self.bytes[start..self.position]).into_owned())
    }

    /// Parses the remainder of a quoted label (opening quote consumed).
    fn parse_quoted_label(&mut self) -> Result<String, NewickError> {
        let mut label = Vec::new();
        loop {
            match self.next_byte() {
                Some(b'\'') => {
                    if self.consume_if(b'\'') {
                        // Doubled quote is an escaped quote
                        label.push(b'\'');
                    } else {
                        return Ok(String::from_utf8_lossy(&label).into_owned());
                    }
                }
                Some(byte) => label.push(byte),
                None => {
                    return Err(NewickError::from_cursor(
                        NewickErrorKind::UnexpectedEof,
                        self,
                    ));
                }
            }
        }
    }
}

// =#========================================================================#=
// GRAMMAR
// =#========================================================================#=
/// Parses a single Newick tree from the given [Cursor].
///
/// # Returns
/// * `Ok(GeneTree)` - The parsed gene tree
/// * `Err(NewickError)` - If the Newick format is invalid
pub(crate) fn parse_tree(cursor: &mut Cursor<'_>) -> Result<GeneTree, NewickError> {
    let mut tree = GeneTree::new();

    cursor.skip_comment_and_whitespace()?;
    if cursor.is_eof() {
        return Err(NewickError::from_cursor(
            NewickErrorKind::UnexpectedEof,
            cursor,
        ));
    }

    let root_index = parse_vertex(&mut tree, cursor)?;

    // Consume the terminating semicolon
    cursor.skip_comment_and_whitespace()?;
    if !cursor.consume_if(b';') {
        let next_char = cursor.peek().map(char::from);
        return Err(NewickError::from_cursor(
            NewickErrorKind::Invalid(format!(
                "Expected ';' at end of tree but found {:?}",
                next_char
            )),
            cursor,
        ));
    }

    tree.set_root(root_index);
    Ok(tree)
}

/// Parses all Newick trees from the cursor until end of input.
pub(crate) fn parse_all(cursor: &mut Cursor<'_>) -> Result<Vec<GeneTree>, NewickError> {
    let mut trees = Vec::new();
    loop {
        cursor.skip_comment_and_whitespace()?;
        if cursor.is_eof() {
            break;
        }
        trees.push(parse_tree(cursor)?);
    }
    Ok(trees)
}

/// Parses a vertex (either internal vertex or leaf) and returns its index:
/// - Skips leading comments and whitespace
/// - Dispatches to `parse_internal` if starts with `(`, otherwise `parse_leaf`
fn parse_vertex(tree: &mut GeneTree, cursor: &mut Cursor<'_>) -> Result<VertexIndex, NewickError> {
    cursor.skip_comment_and_whitespace()?;
    if cursor.peek_is(b'(') {
        parse_internal(tree, cursor)
    } else {
        parse_leaf(tree, cursor)
    }
}

/// Parses internal vertex `(child[,child]*)[name][:branch_length]`,
/// adds it to the tree, and returns its index.
///
/// Any name on an internal vertex (commonly a support value) is discarded.
fn parse_internal(
    tree: &mut GeneTree,
    cursor: &mut Cursor<'_>,
) -> Result<VertexIndex, NewickError> {
    // Parse: "(child"
    // Calling method checked for the opening parenthesis
    cursor.consume_if(b'(');
    let mut children = vec![parse_vertex(tree, cursor)?];

    // Parse: ",child" repeated
    loop {
        cursor.skip_comment_and_whitespace()?;
        if cursor.consume_if(b',') {
            children.push(parse_vertex(tree, cursor)?);
        } else {
            break;
        }
    }

    // Parse: ")"
    if !cursor.consume_if(b')') {
        let next_char = cursor.peek().map(char::from);
        return Err(NewickError::from_cursor(
            NewickErrorKind::Invalid(format!(
                "Expected ')' after children but found {:?}",
                next_char
            )),
            cursor,
        ));
    }

    // Optional internal vertex name, discarded
    cursor.skip_comment_and_whitespace()?;
    if let Some(byte) = cursor.peek() {
        if !LABEL_DELIMITERS.contains(&byte) || byte == b'\'' {
            let _ = cursor.parse_label()?;
        }
    }

    let branch_length = parse_branch_length(cursor)?;
    Ok(tree.add_internal(children, branch_length))
}

/// Parses leaf vertex `name[:branch_length]`, adds it to the tree,
/// and returns its index.
fn parse_leaf(tree: &mut GeneTree, cursor: &mut Cursor<'_>) -> Result<VertexIndex, NewickError> {
    let name = cursor.parse_label()?;
    let branch_length = parse_branch_length(cursor)?;
    Ok(tree.add_leaf(name, branch_length))
}

/// Parses optional branch length `[:number]`:
/// - Skips comments/whitespace before and after `:`
/// - Supports scientific notation (e.g., `1.5e-10`)
/// - Rejects negative values
fn parse_branch_length(cursor: &mut Cursor<'_>) -> Result<Option<BranchLength>, NewickError> {
    cursor.skip_comment_and_whitespace()?;
    if !cursor.consume_if(b':') {
        return Ok(None);
    }
    cursor.skip_comment_and_whitespace()?;

    // Find end of branch length substring
    let mut branch_length_str = String::new();
    while let Some(byte) = cursor.peek() {
        // Valid characters for a float: digits, '.', '-', '+', 'e', 'E'
        if byte.is_ascii_digit() || matches!(byte, b'.' | b'-' | b'+' | b'e' | b'E') {
            branch_length_str.push(byte as char);
            cursor.next_byte();
        } else {
            break;
        }
    }

    // Parse branch length substring
    let value: f64 = branch_length_str.parse().map_err(|_| {
        NewickError::from_cursor(
            NewickErrorKind::InvalidBranchLength(branch_length_str.clone()),
            cursor,
        )
    })?;
    if value < 0.0 || !value.is_finite() {
        return Err(NewickError::from_cursor(
            NewickErrorKind::InvalidBranchLength(branch_length_str),
            cursor,
        ));
    }

    Ok(Some(BranchLength::new(value)))
}
