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
    product (batch_id) {
        batch_id -> BigInt,
        product_name -> Text,
        category -> Text,
        description -> Text,
        manufacturing_date -> Nullable<Text>,
        expiry_date -> Nullable<Text>,
        price -> Nullable<Double>,
        manufacturer_name -> Text,
        is_published -> Bool,
        created_at -> Timestamp,
    }
}

table! {
    product_image (id) {
        id -> BigInt,
        batch_id -> BigInt,
        image_index -> Integer,
        image_url -> Text,
    }
}

allow_tables_to_appear_in_same_query!(product, product_image);
