pub mod application {
    pub mod face_match {
        pub mod compare_faces;
        pub mod scan_candidates;
    }
}

pub mod domain {
    pub mod logger;
    pub mod face_match {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod compare_faces;
            pub mod scan_candidates;
        }
    }
}
