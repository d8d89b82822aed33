// Everything that mutates the process environment lives in this one test,
// so no other test in this binary observes a half-set environment.
#[cfg(unix)]
#[test]
fn from_env_reads_only_its_own_variables() {
  use adwords::config::Config;
  use adwords::Error;
  use std::env;
  use std::ffi::OsStr;
  use std::os::unix::ffi::OsStrExt;

  let garbage = OsStr::from_bytes(&[0x66, 0xff, 0x6f]);

  // Non-unicode data in a variable nobody reads is ignored
  env::set_var("ADWORDS_TEST_UNRELATED", garbage);
  env::set_var("ADWORDS_TRIALS", "3");
  let config = Config::from_env().expect("unrelated variables are ignored");
  assert_eq!(config.trials, 3);

  // Non-unicode data in a variable we do read is a configuration error
  env::set_var("ADWORDS_SEED", garbage);
  match Config::from_env() {
    Err(Error::Config(msg)) => assert!(msg.contains("ADWORDS_SEED")),
    other => panic!("unexpected {:?}", other),
  }

  env::remove_var("ADWORDS_SEED");
  env::remove_var("ADWORDS_TRIALS");
  env::remove_var("ADWORDS_TEST_UNRELATED");
}
