//! Forwards `STAFFTRACK_*` entries from `.env` to the compiler so the wasm client can read
//! them with `option_env!`. Variables already set in the build environment win.

const FORWARDED_VARS: [&str; 2] = ["STAFFTRACK_API_URL", "STAFFTRACK_LOGIN_PATH"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for var in FORWARDED_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    let entries = match dotenvy::from_filename_iter(".env") {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries {
        let Ok((key, value)) = entry else {
            println!("cargo:warning=Skipping malformed line in .env");
            continue;
        };

        if FORWARDED_VARS.contains(&key.as_str()) && std::env::var(&key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
