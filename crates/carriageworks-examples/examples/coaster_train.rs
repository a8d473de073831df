//! Coaster train example: a fully equipped lead car.
//!
//! Assembles a car with two bogies and wheel assemblies, scenery platforms
//! (one with rotational symmetry), an on-ride camera, and a catch-car
//! attach point, then prints the tree through the debug dump and as RON.
//!
//! Run with: `cargo run -p carriageworks-examples --example coaster_train`

use carriageworks_prefab::*;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    // --- Bogies: bone attachments carrying wheel assemblies ---

    let front_bogie = simple_bone_attachment("BogieFront")
        .with_components(bogie_components(AssetPackageLoader::package("SharedWheels")))
        .with_child("WheelAssembly", wheel_assembly("FrontWheels", 4))
        .with_child(
            "GuideWheel",
            wheel_child("GuideWheelBone_F", "GuideWheelSmall", Some(0.35)),
        );

    let rear_bogie = simple_bone_attachment("BogieRear")
        .with_components(bogie_components(AssetPackageLoader::package("SharedWheels")))
        .with_child("WheelAssembly", wheel_assembly("RearWheels", 4));

    // --- The car: three colour channels, 1.2 tonnes ---

    let lead_car = PrefabNode::new()
        .with_components(train_car_components(
            "MineTrainLeadCar",
            AssetPackageLoader::package("MineTrainCars"),
            3,
            1200.0,
        ))
        .with_child("FrontBogie", front_bogie)
        .with_child("RearBogie", rear_bogie)
        .with_child(
            "PlatformFront",
            simple_scenery_platform("MineTrainPlatform", "Front"),
        )
        .with_child(
            "PlatformRear",
            rotational_symmetry_scenery_platform(
                "MineTrainPlatform",
                "Rear",
                transform(DVec3::ZERO, DVec3::new(0.0, std::f64::consts::PI, 0.0), 1.0),
            ),
        )
        .with_child(
            "OnRideCamera",
            simple_camera_child("RideCamera", DVec3::new(0.0, 1.4, -0.3), DVec3::ZERO),
        )
        .with_child("CatchCarPoint", simple_attach_point("CatchCarBone"));

    // Trim colour for the livery, the way authoring code derives channel
    // defaults from designer-supplied hex values.
    let trim = hex_color_to_normalized("#C43B1F");
    println!("Trim colour: ({:.3}, {:.3}, {:.3})", trim.x, trim.y, trim.z);

    println!("--- debug dump (via log) ---");
    print_prefab(&lead_car);

    println!("--- RON emission ---");
    match to_ron_string(&lead_car) {
        Ok(ron) => println!("{ron}"),
        Err(err) => eprintln!("emission failed: {err}"),
    }
}
