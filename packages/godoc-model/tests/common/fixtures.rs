//! Go source fixtures

use std::fs;
use std::path::{Path, PathBuf};

/// Package with one untyped const block and one error variable
pub const CONST_AND_ERROR_SRC: &str = r#"// Package shapes draws shapes.
package shapes

import "errors"

// Limits.
const (
	A = 1
	B = 2
)

// ErrX is returned when x happens.
var ErrX = errors.New("x")
"#;

/// Package with a type, its constructor, methods and typed constants
pub const BUFFER_SRC: &str = r#"// Package buf provides buffers.
package buf

import (
	"errors"
	"io"
	"strings"
)

// Mode selects how a Buffer grows.
type Mode int

// Growth modes.
const (
	Linear Mode = iota
	Doubling
)

// Buffer is a growable byte buffer.
type Buffer struct {
	data []byte
	mode Mode
}

// NewBuffer returns an empty buffer.
func NewBuffer(mode Mode) *Buffer {
	return &Buffer{mode: mode}
}

// Write appends p.
func (b *Buffer) Write(p []byte) (n int, err error) {
	b.data = append(b.data, p...)
	return len(p), nil
}

// Len reports the number of buffered bytes.
func (b Buffer) Len() int { return len(b.data) }

// Join concatenates parts.
func Join(sep string, parts ...string) string {
	return strings.Join(parts, sep)
}

// Copy copies src into dst.
func Copy(dst io.Writer, src *Buffer) error {
	_, err := dst.Write(src.data)
	return err
}

var (
	// ErrFull is returned when the buffer cannot grow.
	ErrFull = errors.New("full")
	DefaultSize = 64
)

func helper() {}
"#;

/// Same-package test file for `buf`
pub const BUFFER_TEST_SRC: &str = r#"package buf

import "testing"

func TestLen(t *testing.T) {}
"#;

/// External test package for `buf`
pub const BUFFER_XTEST_SRC: &str = r#"package buf_test

import (
	"example.com/buf"
	"testing"
)

func TestWrite(t *testing.T) { _ = buf.NewBuffer(0) }
"#;

/// Write `files` into `<root>/<import_path>` and return that directory
pub fn write_package(root: &Path, import_path: &str, files: &[(&str, &str)]) -> PathBuf {
    let dir = root.join(import_path);
    fs::create_dir_all(&dir).unwrap();
    for (name, contents) in files {
        fs::write(dir.join(name), contents).unwrap();
    }
    dir
}
