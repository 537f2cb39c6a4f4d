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

table! {
    manufacturer (license_number) {
        license_number -> Text,
        name -> Text,
        email -> Text,
        phone -> Nullable<Text>,
        address -> Nullable<Text>,
        created_at -> Timestamp,
    }
}

table! {
    manufacturer_certification (id) {
        id -> BigInt,
        license_number -> Text,
        name -> Text,
    }
}

table! {
    manufacturer_product (id) {
        id -> BigInt,
        license_number -> Text,
        name -> Text,
    }
}

allow_tables_to_appear_in_same_query!(
    manufacturer,
    manufacturer_certification,
    manufacturer_product
);
