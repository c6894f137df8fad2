//! Scenario table for `get`, adapted from Mozilla's public-domain
//! test_psl.txt corpus.

use psl_engine_r::get;

fn assert_get(input: &str, expected: Option<&str>) {
    assert_eq!(get(input).as_deref(), expected, "get({:?})", input);
}

#[test]
fn test_empty_input() {
    assert_get("", None);
}

#[test]
fn test_mixed_case() {
    assert_get("COM", None);
    assert_get("example.COM", Some("example.com"));
    assert_get("WwW.example.COM", Some("example.com"));
}

#[test]
fn test_leading_dot() {
    assert_get(".com", None);
    assert_get(".example", None);
    assert_get(".example.com", None);
    assert_get(".example.example", None);
}

#[test]
fn test_unlisted_tld() {
    assert_get("example", None);
    assert_get("example.example", Some("example.example"));
    assert_get("b.example.example", Some("example.example"));
    assert_get("a.b.example.example", Some("example.example"));
}

#[test]
fn test_non_internet_tld() {
    assert_get("local", None);
    assert_get("example.local", None);
    assert_get("b.example.local", None);
    assert_get("a.b.example.local", None);
}

#[test]
fn test_tld_with_single_rule() {
    assert_get("biz", None);
    assert_get("domain.biz", Some("domain.biz"));
    assert_get("b.domain.biz", Some("domain.biz"));
    assert_get("a.b.domain.biz", Some("domain.biz"));
}

#[test]
fn test_tld_with_two_level_rules() {
    assert_get("com", None);
    assert_get("example.com", Some("example.com"));
    assert_get("b.example.com", Some("example.com"));
    assert_get("a.b.example.com", Some("example.com"));
    assert_get("uk.com", None);
    assert_get("example.uk.com", Some("example.uk.com"));
    assert_get("b.example.uk.com", Some("example.uk.com"));
    assert_get("a.b.example.uk.com", Some("example.uk.com"));
    assert_get("test.ac", Some("test.ac"));
}

#[test]
fn test_complex_tld() {
    assert_get("jp", None);
    assert_get("test.jp", Some("test.jp"));
    assert_get("www.test.jp", Some("test.jp"));
    assert_get("ac.jp", None);
    assert_get("test.ac.jp", Some("test.ac.jp"));
    assert_get("www.test.ac.jp", Some("test.ac.jp"));
    assert_get("kyoto.jp", None);
    assert_get("test.kyoto.jp", Some("test.kyoto.jp"));
    assert_get("ide.kyoto.jp", None);
    assert_get("b.ide.kyoto.jp", Some("b.ide.kyoto.jp"));
    assert_get("a.b.ide.kyoto.jp", Some("b.ide.kyoto.jp"));
    assert_get("c.kobe.jp", None);
    assert_get("b.c.kobe.jp", Some("b.c.kobe.jp"));
    assert_get("a.b.c.kobe.jp", Some("b.c.kobe.jp"));
    assert_get("city.kobe.jp", Some("city.kobe.jp"));
    assert_get("www.city.kobe.jp", Some("city.kobe.jp"));
}

#[test]
fn test_wildcard_and_exception_rules() {
    assert_get("ck", None);
    assert_get("test.ck", None);
    assert_get("b.test.ck", Some("b.test.ck"));
    assert_get("a.b.test.ck", Some("b.test.ck"));
    assert_get("www.ck", Some("www.ck"));
    assert_get("www.www.ck", Some("www.ck"));
}

#[test]
fn test_us_k12() {
    assert_get("us", None);
    assert_get("test.us", Some("test.us"));
    assert_get("www.test.us", Some("test.us"));
    assert_get("ak.us", None);
    assert_get("test.ak.us", Some("test.ak.us"));
    assert_get("www.test.ak.us", Some("test.ak.us"));
    assert_get("k12.ak.us", None);
    assert_get("test.k12.ak.us", Some("test.k12.ak.us"));
    assert_get("www.test.k12.ak.us", Some("test.k12.ak.us"));
}

#[test]
fn test_idn_labels() {
    assert_get("食狮.com.cn", Some("食狮.com.cn"));
    assert_get("食狮.公司.cn", Some("食狮.公司.cn"));
    assert_get("www.食狮.公司.cn", Some("食狮.公司.cn"));
    assert_get("shishi.公司.cn", Some("shishi.公司.cn"));
    assert_get("公司.cn", None);
    assert_get("食狮.中国", Some("食狮.中国"));
    assert_get("www.食狮.中国", Some("食狮.中国"));
    assert_get("shishi.中国", Some("shishi.中国"));
    assert_get("中国", None);
}

#[test]
fn test_idn_labels_punycoded() {
    assert_get("xn--85x722f.com.cn", Some("xn--85x722f.com.cn"));
    assert_get("xn--85x722f.xn--55qx5d.cn", Some("xn--85x722f.xn--55qx5d.cn"));
    assert_get(
        "www.xn--85x722f.xn--55qx5d.cn",
        Some("xn--85x722f.xn--55qx5d.cn"),
    );
    assert_get("shishi.xn--55qx5d.cn", Some("shishi.xn--55qx5d.cn"));
    assert_get("xn--55qx5d.cn", None);
    assert_get("xn--85x722f.xn--fiqs8s", Some("xn--85x722f.xn--fiqs8s"));
    assert_get(
        "www.xn--85x722f.xn--fiqs8s",
        Some("xn--85x722f.xn--fiqs8s"),
    );
    assert_get("shishi.xn--fiqs8s", Some("shishi.xn--fiqs8s"));
    assert_get("xn--fiqs8s", None);
}

#[test]
fn test_idempotent_normalization() {
    // Lowercasing and trailing-dot stripping do not change the outcome.
    for input in ["example.com", "data.gov.uk", "b.test.ck"] {
        let base = get(input);
        assert_eq!(get(&format!("{}.", input)), base, "{}.", input);
        assert_eq!(get(&input.to_uppercase()), base, "{}", input.to_uppercase());
    }
}
