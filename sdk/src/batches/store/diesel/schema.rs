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
    herb_batch (batch_id) {
        batch_id -> BigInt,
        herb_name -> Text,
        quantity -> Text,
        geo_location -> Text,
        image_url -> Text,
        farmer_name -> Text,
        farmer_email -> Text,
        collection_timestamp -> Timestamp,
    }
}

table! {
    batch_status_entry (id) {
        id -> BigInt,
        batch_id -> BigInt,
        status -> Text,
        updated_by -> Nullable<Text>,
        updated_at -> Timestamp,
    }
}

table! {
    batch_certification (id) {
        id -> BigInt,
        batch_id -> BigInt,
        name -> Text,
        file_url -> Text,
        uploaded_at -> Timestamp,
        uploaded_by -> Text,
    }
}

allow_tables_to_appear_in_same_query!(herb_batch, batch_status_entry, batch_certification);
