/// Attribute layouts: ordered, offset-tagged fields of a shader interface
///
/// Used for vertex inputs, push constant blocks and the members of uniform and
/// storage buffers. Insertion order mirrors declaration order in the shader
/// source and is load-bearing: offsets are assigned on append.

use super::ShaderDataType;

/// One named, typed field of an attribute layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutElement {
    data_type: ShaderDataType,
    name: String,
    size_bytes: u32,
    offset_bytes: u32,
}

impl LayoutElement {
    /// Data type of the field
    pub fn data_type(&self) -> ShaderDataType {
        self.data_type
    }

    /// Field name as declared in the shader
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes, derived from the data type
    pub fn size_bytes(&self) -> u32 {
        self.size_bytes
    }

    /// Offset in bytes from the start of the layout
    pub fn offset_bytes(&self) -> u32 {
        self.offset_bytes
    }
}

/// Append-only sequence of layout elements with a running total size
///
/// Invariant: the element at position `i` has an offset equal to the sum of the
/// sizes of elements `0..i`, and `total_size_bytes()` is the sum of all sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeLayout {
    elements: Vec<LayoutElement>,
    total_size_bytes: u32,
}

impl AttributeLayout {
    /// Create an empty layout
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            total_size_bytes: 0,
        }
    }

    /// Build a layout from `(data_type, name)` pairs, in order
    pub fn from_elements<I, S>(elements: I) -> Self
    where
        I: IntoIterator<Item = (ShaderDataType, S)>,
        S: Into<String>,
    {
        let mut layout = Self::new();
        for (data_type, name) in elements {
            layout.append(data_type, name);
        }
        layout
    }

    /// Append a field at the end of the layout
    ///
    /// The field's offset is the current total size; the total then grows by
    /// the field's size.
    pub fn append(&mut self, data_type: ShaderDataType, name: impl Into<String>) {
        let size_bytes = data_type.size_bytes();
        self.elements.push(LayoutElement {
            data_type,
            name: name.into(),
            size_bytes,
            offset_bytes: self.total_size_bytes,
        });
        self.total_size_bytes += size_bytes;
    }

    /// Sum of the sizes of all fields
    pub fn total_size_bytes(&self) -> u32 {
        self.total_size_bytes
    }

    /// Number of fields
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Field at a position, in declaration order
    pub fn get(&self, index: usize) -> Option<&LayoutElement> {
        self.elements.get(index)
    }

    /// First field with this name
    pub fn find(&self, name: &str) -> Option<&LayoutElement> {
        self.elements.iter().find(|element| element.name == name)
    }

    /// Iterate fields in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, LayoutElement> {
        self.elements.iter()
    }
}

impl<'a> IntoIterator for &'a AttributeLayout {
    type Item = &'a LayoutElement;
    type IntoIter = std::slice::Iter<'a, LayoutElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
