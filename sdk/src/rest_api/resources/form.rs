// Copyright 2024 HerbsTrace Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A framework independent view of a `multipart/form-data` request body.

use std::collections::HashMap;

/// A file part of a multipart form
#[derive(Clone, Debug, PartialEq)]
pub struct UploadedFile {
    pub field_name: String,
    /// The file name reported by the client, if any
    pub file_name: Option<String>,
    pub content: Vec<u8>,
}

/// The text fields and files of a multipart form, in the order they were received.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: Vec<UploadedFile>,
}

impl MultipartForm {
    pub fn new() -> Self {
        MultipartForm::default()
    }

    /// Records a text field; a repeated field keeps its last value.
    pub fn add_field(&mut self, name: String, value: String) {
        self.fields.insert(name, value);
    }

    pub fn add_file(&mut self, file: UploadedFile) {
        self.files.push(file);
    }

    /// Returns the value of a text field, treating an empty value as absent.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|value| value.as_str())
            .filter(|value| !value.trim().is_empty())
    }

    /// Returns the files uploaded under `field_name`, in upload order.
    pub fn files(&self, field_name: &str) -> Vec<&UploadedFile> {
        self.files
            .iter()
            .filter(|file| file.field_name == field_name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_ignores_empty_values() {
        let mut form = MultipartForm::new();
        form.add_field("herbName".to_string(), "Tulsi".to_string());
        form.add_field("farmerName".to_string(), "  ".to_string());

        assert_eq!(form.text("herbName"), Some("Tulsi"));
        assert_eq!(form.text("farmerName"), None);
        assert_eq!(form.text("quantity"), None);
    }

    #[test]
    fn test_files_by_field() {
        let mut form = MultipartForm::new();
        for (field_name, file_name) in [
            ("certifications", "a.pdf"),
            ("image", "leaf.jpg"),
            ("certifications", "b.pdf"),
        ]
        .iter()
        {
            form.add_file(UploadedFile {
                field_name: field_name.to_string(),
                file_name: Some(file_name.to_string()),
                content: vec![],
            });
        }

        let certifications: Vec<Option<&str>> = form
            .files("certifications")
            .into_iter()
            .map(|file| file.file_name.as_deref())
            .collect();
        assert_eq!(certifications, vec![Some("a.pdf"), Some("b.pdf")]);
        assert_eq!(form.files("image").len(), 1);
        assert!(form.files("productImages").is_empty());
    }
}
