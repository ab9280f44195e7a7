use odin_gdal::GdalTranslate;

#[test]
fn test_args() {
    let mut translate = GdalTranslate::new("in.tif", "out.tif");
    translate
        .set_output_format("COG")
        .add_create_option("BLOCKSIZE", "512")
        .add_create_option("compress", "deflate")
        .add_metadata_item("YEAR", "2018");

    assert_eq!( translate.executable(), "gdal_translate");
    assert_eq!( translate.args(), vec![
        "-of", "COG", "-co", "BLOCKSIZE=512", "-co", "compress=deflate", "-mo", "YEAR=2018", "in.tif", "out.tif"
    ]);
}

#[cfg(unix)]
#[test]
fn test_exec_captures_output() {
    let mut translate = GdalTranslate::new("in.tif", "out.tif");
    translate.set_executable("echo");

    let output = translate.exec().unwrap();
    assert!( output.success());
    assert_eq!( output.exit_code(), Some(0));
    assert_eq!( output.stdout.trim(), "in.tif out.tif");
    assert_eq!( output.combined().trim(), "in.tif out.tif");
}

#[test]
fn test_spawn_failure() {
    let mut translate = GdalTranslate::new("in.tif", "out.tif");
    translate.set_executable("/this/tool/does/not/exist");

    assert!( translate.exec().is_err());
}
