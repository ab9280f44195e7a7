#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::Command;
use chrono::{TimeZone, Utc};
use gdal::{DriverManager, Metadata};
use gdal::spatial_ref::SpatialRef;
use odin_gdal::RasterInfo;
use odin_stac::*;
use odin_stac::stac::{Collection, Item};

// stand-in for gdal_translate that just copies the source (second to last arg) to the target (last arg)
const COPY_TRANSLATE: &str = "#!/bin/sh\neval src=\\${$(($# - 1))}\neval tgt=\\${$#}\ncp \"$src\" \"$tgt\"\n";

fn create_raster (path: &Path, tags: &[(&str,&str)]) {
    let driver = DriverManager::get_driver_by_name("GTiff").unwrap();
    let mut ds = driver.create_with_band_type::<f32,_>(path, 40, 20, 1).unwrap();
    ds.set_geo_transform(&[500000.0, 1.0, 0.0, 5500000.0, 0.0, -1.0]).unwrap();
    ds.set_spatial_ref(&SpatialRef::from_epsg(3157).unwrap()).unwrap();
    for (k,v) in tags {
        ds.set_metadata_item(k, v, "").unwrap();
    }
}

fn has_gdal_translate () -> bool {
    Command::new("gdal_translate").arg("--version").output().map(|o| o.status.success()).unwrap_or(false)
}

#[test]
fn test_convert_describe_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.tif");
    create_raster(&source, &[("YEAR","2018")]);

    let exe = dir.path().join("translate.sh");
    std::fs::write(&exe, COPY_TRANSLATE).unwrap();
    std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

    let cog = dir.path().join("cogs").join("BC_092B012_2018.tif");
    std::fs::create_dir_all(cog.parent().unwrap()).unwrap();
    let cog_href = cog.to_str().unwrap();

    let request = ConversionRequest::new( source.to_str().unwrap(), cog_href, 2018);
    create_cog_with( &request, exe.to_str().unwrap()).unwrap();

    let profile = DatasetProfile::bc_dem();
    let item = create_item_from_href( cog_href, None, &profile).unwrap();
    assert_eq!( item.id, "BC_092B012_2018");
    assert_eq!( item.properties.datetime, Utc.with_ymd_and_hms(2018,1,1, 0,0,0).unwrap());
    assert_eq!( item.assets["data"].file_size, Some(std::fs::metadata(&cog).unwrap().len()));

    let item_path = dir.path().join("stac").join("BC_092B012_2018.json");
    item.write_to(&item_path).unwrap();

    let collection_path = dir.path().join("stac").join("collection.json");
    let mut collection = create_collection(&profile);
    collection.set_self_href( collection_path.to_str().unwrap());
    collection.write_to(&collection_path).unwrap();

    let item = Item::read_from(&item_path).unwrap();
    let collection = Collection::read_from(&collection_path).unwrap();
    assert_eq!( item.assets["data"].raster_bands, collection.item_assets["data"].raster_bands);
    assert_eq!( item.properties.projection.epsg, collection.item_assets["data"].projection.epsg);
}

#[test]
fn test_real_gdal_translate() {
    if !has_gdal_translate() {
        eprintln!("gdal_translate not found, skipping");
        return
    }

    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.tif");
    create_raster(&source, &[]);

    let cog = dir.path().join("BC_092B012_2019.tif");
    create_cog( source.to_str().unwrap(), 2019, cog.to_str().unwrap()).unwrap();

    let info = RasterInfo::open(&cog).unwrap();
    assert_eq!( info.metadata_item("YEAR"), Some("2019"));

    let item = create_item_from_href( cog.to_str().unwrap(), None, &DatasetProfile::bc_dem()).unwrap();
    assert_eq!( item.properties.datetime, Utc.with_ymd_and_hms(2019,1,1, 0,0,0).unwrap());
    assert_eq!( item.properties.projection.shape, Some([20, 40]));
}
