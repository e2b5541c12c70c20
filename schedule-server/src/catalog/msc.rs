//! The compiled-in MSC Asia → South America network.
//!
//! Lane data for the Far East / South East Asia / India export trades
//! into Brazil and the River Plate. Loop services (Santana, Carioca,
//! Ipanema) call their ports directly; Tiger, Jade, Dragon and Lion reach
//! Brazil via Mediterranean transshipment.

use super::error::CatalogError;
use super::routes::{CatalogBuilder, RouteCatalog};

const SANTANA: &[&str] = &["Santana"];
const CARIOCA: &[&str] = &["Carioca"];
const IPANEMA: &[&str] = &["Ipanema"];
const IPANEMA_CARIOCA: &[&str] = &["Ipanema", "Carioca"];
const TIGER: &[&str] = &["Tiger"];

/// Build the default catalog.
///
/// Only a configuration mistake in the table below can make this fail,
/// so callers at startup treat an error as fatal.
pub fn msc_network() -> Result<RouteCatalog, CatalogError> {
    CatalogBuilder::new()
        // Santana loop: north / north-east Brazil
        .route("Yantian", "Suape", SANTANA)
        .route("Yantian", "Salvador", SANTANA)
        .route("Yantian", "Pecem", SANTANA)
        .route("Yantian", "Manaus", SANTANA)
        .route("Yantian", "Fortaleza", SANTANA)
        .route("Ningbo", "Suape", SANTANA)
        .route("Ningbo", "Salvador", SANTANA)
        .route("Ningbo", "Pecem", SANTANA)
        .route("Ningbo", "Manaus", SANTANA)
        .route("Ningbo", "Fortaleza", SANTANA)
        .route("Shanghai", "Suape", SANTANA)
        .route("Shanghai", "Salvador", SANTANA)
        .route("Shanghai", "Pecem", SANTANA)
        .route("Shanghai", "Manaus", SANTANA)
        .route("Shanghai", "Fortaleza", SANTANA)
        .route("Qingdao", "Suape", SANTANA)
        .route("Qingdao", "Salvador", SANTANA)
        .route("Qingdao", "Pecem", SANTANA)
        .route("Qingdao", "Manaus", SANTANA)
        .route("Qingdao", "Fortaleza", SANTANA)
        .route("Busan", "Suape", SANTANA)
        .route("Busan", "Salvador", SANTANA)
        .route("Busan", "Pecem", SANTANA)
        .route("Busan", "Manaus", SANTANA)
        .route("Busan", "Fortaleza", SANTANA)
        // Carioca loop from Qingdao: south / south-east Brazil
        .route("Qingdao", "Rio de Janeiro", CARIOCA)
        .route("Qingdao", "Santos", CARIOCA)
        .route("Qingdao", "Paranagua", CARIOCA)
        .route("Qingdao", "Navegantes", CARIOCA)
        .route("Qingdao", "Imbituba", CARIOCA)
        .route("Qingdao", "Itajai", CARIOCA)
        .route("Qingdao", "Itaguai", CARIOCA)
        .route("Qingdao", "Itapoa", CARIOCA)
        // Busan: Carioca plus Ipanema overlap
        .route("Busan", "Rio de Janeiro", CARIOCA)
        .route("Busan", "Santos", IPANEMA_CARIOCA)
        .route("Busan", "Paranagua", IPANEMA_CARIOCA)
        .route("Busan", "Navegantes", IPANEMA_CARIOCA)
        .route("Busan", "Imbituba", CARIOCA)
        .route("Busan", "Itajai", CARIOCA)
        .route("Busan", "Itaguai", CARIOCA)
        .route("Busan", "Itapoa", CARIOCA)
        .route("Busan", "Rio Grande", IPANEMA)
        .route("Busan", "Montevideo", IPANEMA)
        .route("Busan", "Buenos Aires", IPANEMA)
        // Ningbo
        .route("Ningbo", "Rio de Janeiro", CARIOCA)
        .route("Ningbo", "Santos", IPANEMA_CARIOCA)
        .route("Ningbo", "Paranagua", IPANEMA_CARIOCA)
        .route("Ningbo", "Navegantes", IPANEMA_CARIOCA)
        .route("Ningbo", "Imbituba", CARIOCA)
        .route("Ningbo", "Itajai", CARIOCA)
        .route("Ningbo", "Itaguai", CARIOCA)
        .route("Ningbo", "Itapoa", CARIOCA)
        .route("Ningbo", "Rio Grande", IPANEMA)
        .route("Ningbo", "Montevideo", IPANEMA)
        .route("Ningbo", "Buenos Aires", IPANEMA)
        // Shanghai
        .route("Shanghai", "Rio de Janeiro", CARIOCA)
        .route("Shanghai", "Santos", IPANEMA_CARIOCA)
        .route("Shanghai", "Paranagua", IPANEMA_CARIOCA)
        .route("Shanghai", "Navegantes", IPANEMA_CARIOCA)
        .route("Shanghai", "Imbituba", CARIOCA)
        .route("Shanghai", "Itajai", CARIOCA)
        .route("Shanghai", "Itaguai", CARIOCA)
        .route("Shanghai", "Itapoa", CARIOCA)
        .route("Shanghai", "Rio Grande", IPANEMA)
        .route("Shanghai", "Montevideo", IPANEMA)
        .route("Shanghai", "Buenos Aires", IPANEMA)
        // Shekou
        .route("Shekou", "Rio de Janeiro", CARIOCA)
        .route("Shekou", "Santos", IPANEMA_CARIOCA)
        .route("Shekou", "Paranagua", IPANEMA_CARIOCA)
        .route("Shekou", "Navegantes", IPANEMA_CARIOCA)
        .route("Shekou", "Imbituba", CARIOCA)
        .route("Shekou", "Itajai", CARIOCA)
        .route("Shekou", "Itaguai", CARIOCA)
        .route("Shekou", "Itapoa", CARIOCA)
        .route("Shekou", "Rio Grande", IPANEMA)
        .route("Shekou", "Montevideo", IPANEMA)
        .route("Shekou", "Buenos Aires", IPANEMA)
        // Ipanema loop: south Brazil and the River Plate
        .route("Yantian", "Santos", IPANEMA)
        .route("Yantian", "Paranagua", IPANEMA)
        .route("Yantian", "Navegantes", IPANEMA)
        .route("Yantian", "Rio Grande", IPANEMA)
        .route("Yantian", "Montevideo", IPANEMA)
        .route("Yantian", "Buenos Aires", IPANEMA)
        .route("Hong Kong", "Santos", IPANEMA)
        .route("Hong Kong", "Paranagua", IPANEMA)
        .route("Hong Kong", "Navegantes", IPANEMA)
        .route("Hong Kong", "Rio Grande", IPANEMA)
        .route("Hong Kong", "Montevideo", IPANEMA)
        .route("Hong Kong", "Buenos Aires", IPANEMA)
        // Singapore
        .route("Singapore", "Rio de Janeiro", CARIOCA)
        .route("Singapore", "Santos", IPANEMA_CARIOCA)
        .route("Singapore", "Paranagua", IPANEMA_CARIOCA)
        .route("Singapore", "Navegantes", IPANEMA_CARIOCA)
        .route("Singapore", "Imbituba", CARIOCA)
        .route("Singapore", "Itajai", CARIOCA)
        .route("Singapore", "Itaguai", CARIOCA)
        .route("Singapore", "Rio Grande", IPANEMA)
        .route("Singapore", "Montevideo", IPANEMA)
        .route("Singapore", "Buenos Aires", IPANEMA)
        // Xiamen: Jade and Tiger reach Brazil via the Mediterranean
        .route("Xiamen", "Santos", &["Ipanema", "Carioca", "Jade", "Tiger"])
        .route("Xiamen", "Paranagua", &["Ipanema", "Carioca", "Jade", "Tiger"])
        .route("Xiamen", "Navegantes", &["Ipanema", "Carioca", "Jade", "Tiger"])
        .route("Xiamen", "Itajai", &["Carioca", "Jade"])
        .route("Xiamen", "Imbituba", CARIOCA)
        .route("Xiamen", "Rio de Janeiro", CARIOCA)
        .route("Xiamen", "Suape", SANTANA)
        .route("Xiamen", "Salvador", SANTANA)
        .route("Xiamen", "Manaus", SANTANA)
        // Tiger via transshipment
        .route("Kaohsiung", "Santos", TIGER)
        .route("Kaohsiung", "Paranagua", TIGER)
        .route("Kaohsiung", "Navegantes", TIGER)
        .route("Kaohsiung", "Itajai", TIGER)
        .route("Dalian", "Santos", TIGER)
        .route("Dalian", "Paranagua", TIGER)
        .route("Dalian", "Navegantes", TIGER)
        .route("Dalian", "Itajai", TIGER)
        .route("Xingang", "Santos", TIGER)
        .route("Xingang", "Paranagua", TIGER)
        .route("Xingang", "Navegantes", TIGER)
        .route("Xingang", "Itajai", TIGER)
        // Nansha: Dragon and Lion via transshipment
        .route("Nansha", "Santos", &["Dragon", "Lion"])
        .route("Nansha", "Paranagua", &["Dragon"])
        .route("Nansha", "Navegantes", &["Dragon"])
        // Colombo: Carioca calls here on the way out
        .route("Colombo", "Rio de Janeiro", CARIOCA)
        .route("Colombo", "Santos", CARIOCA)
        .route("Colombo", "Paranagua", CARIOCA)
        .route("Colombo", "Navegantes", CARIOCA)
        .route("Colombo", "Itajai", CARIOCA)
        .route("Colombo", "Itaguai", CARIOCA)
        // South East Asia, fed via Singapore
        .route("Laem Chabang", "Santos", IPANEMA_CARIOCA)
        .route("Laem Chabang", "Paranagua", IPANEMA_CARIOCA)
        .route("Laem Chabang", "Navegantes", IPANEMA_CARIOCA)
        .route("Ho Chi Minh", "Santos", IPANEMA_CARIOCA)
        .route("Ho Chi Minh", "Paranagua", IPANEMA_CARIOCA)
        .route("Ho Chi Minh", "Navegantes", IPANEMA_CARIOCA)
        .route("Haiphong", "Santos", IPANEMA_CARIOCA)
        .route("Haiphong", "Paranagua", IPANEMA_CARIOCA)
        .route("Haiphong", "Navegantes", IPANEMA_CARIOCA)
        .route("Port Klang", "Santos", IPANEMA_CARIOCA)
        .route("Port Klang", "Paranagua", IPANEMA_CARIOCA)
        .route("Port Klang", "Navegantes", IPANEMA_CARIOCA)
        .route("Tanjung Pelepas", "Santos", IPANEMA_CARIOCA)
        .route("Tanjung Pelepas", "Paranagua", IPANEMA_CARIOCA)
        .route("Tanjung Pelepas", "Navegantes", IPANEMA_CARIOCA)
        .route("Jakarta", "Santos", IPANEMA_CARIOCA)
        .route("Jakarta", "Paranagua", IPANEMA_CARIOCA)
        .route("Jakarta", "Navegantes", IPANEMA_CARIOCA)
        .route("Surabaya", "Santos", IPANEMA_CARIOCA)
        .route("Surabaya", "Paranagua", IPANEMA_CARIOCA)
        .route("Surabaya", "Navegantes", IPANEMA_CARIOCA)
        // India, fed via Colombo
        .route("Mundra", "Santos", CARIOCA)
        .route("Mundra", "Paranagua", CARIOCA)
        .route("Mundra", "Navegantes", CARIOCA)
        .route("Nhava Sheva", "Santos", CARIOCA)
        .route("Nhava Sheva", "Paranagua", CARIOCA)
        .route("Nhava Sheva", "Navegantes", CARIOCA)
        .route("Chennai", "Santos", CARIOCA)
        .route("Chennai", "Paranagua", CARIOCA)
        .route("Chennai", "Navegantes", CARIOCA)
        // Secondary Chinese ports, fed via the main hubs
        .route("Tianjin", "Santos", &["Carioca", "Tiger"])
        .route("Tianjin", "Paranagua", CARIOCA)
        .route("Tianjin", "Navegantes", CARIOCA)
        .route("Tianjin", "Suape", SANTANA)
        .route("Tianjin", "Salvador", SANTANA)
        .route("Fuzhou", "Santos", IPANEMA_CARIOCA)
        .route("Fuzhou", "Paranagua", IPANEMA_CARIOCA)
        .route("Fuzhou", "Navegantes", IPANEMA_CARIOCA)
        .route("Lianyungang", "Santos", CARIOCA)
        .route("Lianyungang", "Paranagua", CARIOCA)
        .route("Lianyungang", "Navegantes", CARIOCA)
        .route("Taicang", "Santos", IPANEMA_CARIOCA)
        .route("Taicang", "Paranagua", IPANEMA_CARIOCA)
        .route("Taicang", "Navegantes", IPANEMA_CARIOCA)
        .route("Qinzhou", "Santos", CARIOCA)
        .route("Qinzhou", "Paranagua", CARIOCA)
        .route("Qinzhou", "Navegantes", CARIOCA)
        .route("Zhanjiang", "Santos", CARIOCA)
        .route("Zhanjiang", "Paranagua", CARIOCA)
        .route("Zhanjiang", "Navegantes", CARIOCA)
        // Origins whose cargo always moves via a regional hub first, so
        // a departure can sail under any service out of the hub
        .connection("Jakarta")
        .connection("Surabaya")
        .connection("Haiphong")
        .connection("Ho Chi Minh")
        .build()
}

#[cfg(test)]
mod tests {
    use crate::domain::{Port, ServiceId};

    use super::*;

    fn port(s: &str) -> Port {
        Port::new(s.to_string()).unwrap()
    }

    fn service(s: &str) -> ServiceId {
        ServiceId::new(s.to_string()).unwrap()
    }

    #[test]
    fn network_builds() {
        assert!(msc_network().is_ok());
    }

    #[test]
    fn known_lanes_exist() {
        let catalog = msc_network().unwrap();

        let shanghai_santos = catalog
            .lookup_services(&port("Shanghai"), &port("Santos"))
            .unwrap();
        assert!(shanghai_santos.contains(&service("Ipanema")));
        assert!(shanghai_santos.contains(&service("Carioca")));

        let nansha_santos = catalog
            .lookup_services(&port("Nansha"), &port("Santos"))
            .unwrap();
        assert!(nansha_santos.contains(&service("Dragon")));
        assert!(nansha_santos.contains(&service("Lion")));

        assert!(catalog
            .lookup_services(&port("Kaohsiung"), &port("Manaus"))
            .is_none());
    }

    #[test]
    fn spaced_port_names_resolve() {
        let catalog = msc_network().unwrap();

        assert!(catalog
            .lookup_services(&port("Hong Kong"), &port("Buenos Aires"))
            .is_some());
        assert!(catalog
            .lookup_services(&port("Shanghai"), &port("Rio de Janeiro"))
            .is_some());
        assert!(catalog
            .lookup_services(&port("Nhava Sheva"), &port("Santos"))
            .is_some());
    }

    #[test]
    fn connection_ports_flagged() {
        let catalog = msc_network().unwrap();

        for name in ["Jakarta", "Surabaya", "Haiphong", "Ho Chi Minh"] {
            assert!(catalog.is_connection_port(&port(name)), "{name}");
        }
        assert!(!catalog.is_connection_port(&port("Shanghai")));
        assert!(!catalog.is_connection_port(&port("Singapore")));
    }

    #[test]
    fn connection_ports_keep_their_lanes() {
        // Jakarta is both mapped and a connection port; connection status
        // is consulted first by the planner but the lanes remain present
        let catalog = msc_network().unwrap();

        assert!(catalog
            .lookup_services(&port("Jakarta"), &port("Santos"))
            .is_some());
    }

    #[test]
    fn universe_covers_every_loop() {
        let catalog = msc_network().unwrap();
        let universe = catalog.service_universe();

        for name in ["Santana", "Carioca", "Ipanema", "Jade", "Tiger", "Dragon", "Lion"] {
            assert!(universe.contains(&service(name)), "{name}");
        }
        assert_eq!(universe.len(), 7);
    }

    #[test]
    fn network_shape() {
        let catalog = msc_network().unwrap();

        assert_eq!(catalog.lane_count(), 179);
        assert_eq!(catalog.connection_port_count(), 4);
        assert_eq!(catalog.origins().len(), 30);
    }
}
