use crate::api::WayfarerApi;
use crate::dataset::Dataset;
use crate::store::fs_backend::FsBackend;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Five destinations across Italy, France and Germany. The first header carries
/// a byte-order mark and Amalfi Coast (id 4) has no usable coordinates.
pub const SAMPLE_CSV: &str = "\u{feff}Destination,Region,Country,Category,Latitude,Longitude,Approximate Annual Tourists,Currency,Majority Religion,Famous Foods,Language,Best Time to Visit,Cost of Living,Safety,Cultural Significance,Description
Rome (Colosseum),Lazio,Italy,City,41.8902,12.4922,7 million,Euro,Roman Catholic,\"Pizza, Pasta, Gelato\",Italian,Spring (April-May),High,Generally safe,Ancient Roman history,Iconic amphitheatre in the heart of Rome.
Paris,Ile-de-France,France,City,48.8566,2.3522,15 million,Euro,Roman Catholic,\"Croissant, Baguette\",French,Spring (April-June),High,Safe with precautions,Art and culture capital,The City of Light.
Nice,Provence-Alpes-Cote d'Azur,France,Coastal Town,43.7102,7.2620,4 million,Euro,Roman Catholic,Socca,French,Summer (June-August),High,Generally safe,Riviera heritage,Seaside resort on the Mediterranean.
Amalfi Coast,Campania,Italy,Coastal Area,,N/A,5 million,Euro,Roman Catholic,\"Limoncello, Seafood\",Italian,Summer (June-September),High,Generally safe,Scenic coastline,Cliffside villages above the sea.
Berlin,Berlin,Germany,City,52.5200,13.4050,13.5 million,Euro,Christianity,\"Currywurst, Pretzel\",German,Summer (May-September),Moderate,Safe,History and museums,Capital city with a vibrant arts scene.
";

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
    pub dataset_path: PathBuf,
    pub lists_path: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let dataset_path = root.join("destinations.csv");
        fs::write(&dataset_path, SAMPLE_CSV).expect("failed to write sample dataset");
        let lists_path = root.join("lists.json");
        Self {
            _temp_dir: temp_dir,
            root,
            dataset_path,
            lists_path,
        }
    }

    pub fn api(&self) -> WayfarerApi<FsBackend> {
        let dataset = Dataset::load(&self.dataset_path).expect("sample dataset loads");
        WayfarerApi::new(dataset, FsBackend::new(self.lists_path.clone()))
    }
}
